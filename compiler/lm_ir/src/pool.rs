//! Append-only symbol pool.
//!
//! Maps identifier text to dense [`Symbol`] ids and back. Reading an id is
//! an index into the string array; the text-to-id map is only needed while
//! lexing and can be released afterwards.

use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Symbol;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// More distinct strings than a `u32` id can address.
    #[error("symbol pool exceeded capacity: {count} strings, max is {max}", max = u32::MAX)]
    Overflow { count: usize },
}

struct PoolInner {
    /// Text of every symbol, indexed by id. Never shrinks.
    strings: Vec<&'static str>,
    /// Text to id. `None` once released.
    lookup: Option<FxHashMap<&'static str, Symbol>>,
}

impl PoolInner {
    fn rebuild_lookup(strings: &[&'static str]) -> FxHashMap<&'static str, Symbol> {
        let mut map = FxHashMap::default();
        map.reserve(strings.len());
        for (id, text) in (0u32..).zip(strings) {
            map.insert(*text, Symbol::from_raw(id));
        }
        map
    }
}

/// Deduplicating string store shared by every file in one compilation.
///
/// # Thread Safety
/// Lookups take a read lock; inserts take the write lock and re-check,
/// so concurrent callers interning the same text get the same id.
/// Wrap in [`SharedSymbolPool`] to hand it to worker threads.
pub struct SymbolPool {
    inner: RwLock<PoolInner>,
}

impl SymbolPool {
    /// Create an empty pool. The first interned string gets id 0.
    pub fn new() -> Self {
        SymbolPool {
            inner: RwLock::new(PoolInner {
                strings: Vec::with_capacity(256),
                lookup: Some(FxHashMap::default()),
            }),
        }
    }

    /// Try to intern a string, returning its Symbol or an error on overflow.
    pub fn try_intern(&self, text: &str) -> Result<Symbol, PoolError> {
        // Fast path: already interned
        {
            let guard = self.inner.read();
            if let Some(&sym) = guard.lookup.as_ref().and_then(|map| map.get(text)) {
                return Ok(sym);
            }
        }

        let mut guard = self.inner.write();
        let PoolInner { strings, lookup } = &mut *guard;
        let lookup = lookup.get_or_insert_with(|| {
            tracing::debug!(
                strings = strings.len(),
                "rebuilding symbol lookup index after release"
            );
            PoolInner::rebuild_lookup(strings.as_slice())
        });

        // Double-check after acquiring write lock
        if let Some(&sym) = lookup.get(text) {
            return Ok(sym);
        }

        let id = u32::try_from(strings.len()).map_err(|_| PoolError::Overflow {
            count: strings.len(),
        })?;
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let sym = Symbol::from_raw(id);
        strings.push(leaked);
        lookup.insert(leaked, sym);
        Ok(sym)
    }

    /// Intern a string, returning its Symbol.
    ///
    /// # Panics
    /// Panics if the pool already holds `u32::MAX + 1` strings.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, text: &str) -> Symbol {
        self.try_intern(text).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Text of a symbol, or `None` if this pool never issued it.
    pub fn try_resolve(&self, sym: Symbol) -> Option<&'static str> {
        self.inner.read().strings.get(sym.index()).copied()
    }

    /// Text of a symbol.
    ///
    /// # Panics
    /// Panics if `sym` was not produced by this pool.
    pub fn resolve(&self, sym: Symbol) -> &'static str {
        self.try_resolve(sym)
            .unwrap_or_else(|| panic!("{sym:?} was not issued by this symbol pool"))
    }

    /// Drop the text-to-id index once no more lexing will happen.
    ///
    /// Resolving keeps working. Interning again rebuilds the index.
    pub fn release_lookup_index(&self) {
        let released = self.inner.write().lookup.take();
        if let Some(map) = released {
            tracing::debug!(entries = map.len(), "released symbol lookup index");
        }
    }

    /// Whether the text-to-id index is currently held.
    pub fn has_lookup_index(&self) -> bool {
        self.inner.read().lookup.is_some()
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.inner.read().strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only access to symbol text.
///
/// Later phases that only print or compare names can take any
/// `SymbolLookup` instead of the concrete pool.
pub trait SymbolLookup {
    fn resolve(&self, sym: Symbol) -> &str;
}

impl SymbolLookup for SymbolPool {
    fn resolve(&self, sym: Symbol) -> &str {
        SymbolPool::resolve(self, sym)
    }
}

/// Pool handle that can be cloned into worker threads.
#[derive(Clone, Default)]
pub struct SharedSymbolPool(Arc<SymbolPool>);

impl SharedSymbolPool {
    pub fn new() -> Self {
        SharedSymbolPool(Arc::new(SymbolPool::new()))
    }
}

impl From<SymbolPool> for SharedSymbolPool {
    fn from(pool: SymbolPool) -> Self {
        SharedSymbolPool(Arc::new(pool))
    }
}

impl Deref for SharedSymbolPool {
    type Target = SymbolPool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl SymbolLookup for SharedSymbolPool {
    fn resolve(&self, sym: Symbol) -> &str {
        self.0.resolve(sym)
    }
}
