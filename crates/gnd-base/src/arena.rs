//! Arena allocation for the tokens produced while parsing a single line.
//!
//! Tokenizing a line allocates a small tree of borrowed [`Token`](../../gnd_syntax/enum.Token.html)
//! values; rather than pay reference-counting overhead for structures that
//! live only as long as the line being parsed, we bump-allocate them and
//! drop the whole arena (or [`reset`](Arena::reset) it) once the line has
//! been turned into an owned `Instruction`.
//!
//! ## Example
//!
//! ```
//! use gnd_base::Arena;
//!
//! let arena: Arena<String> = Arena::new();
//! let s1 = arena.alloc("hello".to_string());
//! let s2 = arena.alloc("world".to_string());
//!
//! assert_eq!(s1, "hello");
//! assert_eq!(s2, "world");
//! ```
//!
//! ## REPL Reuse
//!
//! An interactive front-end can call [`Arena::reset`] between lines to
//! reclaim memory while keeping allocated capacity, instead of dropping
//! and recreating the arena per line.

use bumpalo::Bump;

/// A bump allocator for short-lived, arena-allocated references.
///
/// Values allocated in an arena live until the arena is dropped or reset.
pub struct Arena<T> {
    bump: Bump,
    _marker: std::marker::PhantomData<T>,
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Arena {
            bump: Bump::new(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Allocates a value and returns a reference valid for the arena's lifetime.
    pub fn alloc(&self, value: T) -> &T {
        self.bump.alloc(value)
    }

    /// Allocates a slice from an iterator.
    ///
    /// The iterator must implement [`ExactSizeIterator`] so the arena can
    /// pre-allocate the correct amount of space.
    pub fn alloc_slice<I>(&self, items: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.bump.alloc_slice_fill_iter(items)
    }

    /// Resets the arena, invalidating all references but keeping allocated capacity.
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
