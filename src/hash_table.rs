//! The raw separate-chaining table underneath [`HashMap`](crate::HashMap).
//!
//! [`HashTable`] stores values in a bucket array of chains. Every operation is
//! driven by a caller-supplied `u64` hash and an equality predicate, so the
//! table itself never hashes or compares keys.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Factor by which the bucket array grows or shrinks on a rebuild.
const MULTIPLIER: usize = 2;

type Chain<V> = Vec<(u64, V)>;

#[inline(always)]
fn bucket_index(hash: u64, bucket_count: usize) -> usize {
    (hash % bucket_count as u64) as usize
}

fn empty_buckets<V>(bucket_count: usize) -> Vec<Chain<V>> {
    let mut buckets = Vec::with_capacity(bucket_count);
    buckets.resize_with(bucket_count, Vec::new);
    buckets
}

/// Load-factor thresholds that decide when a [`HashTable`] rebuilds its
/// bucket array.
///
/// Both thresholds are integer multipliers applied to the element count `n`
/// and compared against the bucket count `b`:
///
/// - `n * max_load > b`: the table is too dense and doubles its bucket count.
/// - otherwise `n * min_load < b`: the table is too sparse and halves its
///   bucket count (rounding up, never below one bucket).
///
/// The defaults are `max_load = 1` and `min_load = 8`. Note that `min_load` is
/// the *larger* number: the table keeps between `n` and `8 * n` buckets.
///
/// # Examples
///
/// ```rust
/// # use chain_hash::LoadFactor;
/// #
/// let load = LoadFactor::default();
/// assert_eq!(load.rebuild_target(5, 4), Some(8));
/// assert_eq!(load.rebuild_target(4, 4), None);
/// assert_eq!(load.rebuild_target(1, 16), Some(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadFactor {
    /// Upper bound multiplier; growth triggers when `n * max_load` exceeds
    /// the bucket count.
    pub max_load: usize,
    /// Lower bound multiplier; shrinking triggers when `n * min_load` falls
    /// below the bucket count.
    pub min_load: usize,
}

impl Default for LoadFactor {
    fn default() -> Self {
        Self::new(1, 8)
    }
}

impl LoadFactor {
    /// Creates a new set of thresholds.
    pub const fn new(max_load: usize, min_load: usize) -> Self {
        Self { max_load, min_load }
    }

    /// Returns the bucket count a table holding `populated` elements in
    /// `bucket_count` buckets should be rebuilt to, or `None` when the table
    /// is within bounds.
    pub fn rebuild_target(&self, populated: usize, bucket_count: usize) -> Option<usize> {
        let target = if populated.saturating_mul(self.max_load) > bucket_count {
            bucket_count.saturating_mul(MULTIPLIER)
        } else if populated.saturating_mul(self.min_load) < bucket_count {
            bucket_count.div_ceil(MULTIPLIER).max(1)
        } else {
            return None;
        };

        (target != bucket_count).then_some(target)
    }
}

/// Debug statistics for hash table analysis.
///
/// Available in tests and with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Number of buckets (chains) in the bucket array
    pub bucket_count: usize,
    /// Number of buckets holding no entries
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Load factor (populated / bucket_count)
    pub load_factor: f64,
    /// Bucket utilization (non-empty buckets / bucket_count)
    pub bucket_utilization: f64,
    /// Total memory in bytes held by the bucket array and its chains
    pub total_bytes: usize,
    /// Memory in bytes reserved by chains but not holding entries
    pub wasted_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {} in {} buckets ({:.2} load factor)",
            self.populated, self.bucket_count, self.load_factor
        );
        println!(
            "Bucket Usage: {}/{} ({:.2}% utilization)",
            self.bucket_count - self.empty_buckets,
            self.bucket_count,
            self.bucket_utilization * 100.0
        );
        println!("Longest chain: {} entries", self.longest_chain);
        println!("Total Allocated: {} bytes", self.total_bytes);
        println!(
            "Memory: {} bytes wasted ({:.02}%)",
            self.wasted_bytes,
            if self.total_bytes == 0 {
                0.0
            } else {
                (self.wasted_bytes as f64 / self.total_bytes as f64) * 100.0
            }
        );
    }
}

/// A hash table using separate chaining with load-factor driven rebuilds.
///
/// `HashTable<V>` stores values of type `V` in an array of buckets, each
/// holding a chain of the values whose hash maps to it. Unlike standard hash
/// maps, this implementation requires you to provide both the hash value and
/// an equality predicate for each operation.
///
/// After every insertion and removal the table consults its [`LoadFactor`]
/// and, when out of bounds, rebuilds the whole bucket array at twice or half
/// the size, moving every value into its new chain.
///
/// ## Performance Characteristics
///
/// - **Lookup**: O(1) expected, O(chain length) worst case.
/// - **Memory**: one `Vec` header per bucket, plus the size of `V` plus a u64
///   for the hash per entry.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::new();
/// let hash = hash_id(123);
///
/// // Insert a person
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     chain_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     chain_hash::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    buckets: Vec<Chain<V>>,
    populated: usize,
    load_factor: LoadFactor,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field(
                "chains",
                &self.buckets.iter().map(Vec::len).collect::<Vec<_>>(),
            )
            .field("populated", &self.populated)
            .field("load_factor", &self.load_factor)
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with a single bucket and the default
    /// [`LoadFactor`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.bucket_count(), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_load_factor(LoadFactor::default())
    }

    /// Creates an empty table with a single bucket and the given thresholds.
    pub fn with_load_factor(load_factor: LoadFactor) -> Self {
        Self {
            buckets: empty_buckets(1),
            populated: 0,
            load_factor,
        }
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of elements in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// assert_eq!(table.len(), 0);
    ///
    /// table.entry(1, |&n: &u64| n == 1).or_insert(1);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns the number of buckets in the bucket array. Always at least one.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the thresholds currently driving rebuilds.
    pub fn load_factor(&self) -> LoadFactor {
        self.load_factor
    }

    /// Replaces the rebuild thresholds.
    ///
    /// This does not rebuild the table; the new thresholds are checked after
    /// the next insertion or removal.
    pub fn set_load_factor(&mut self, load_factor: LoadFactor) {
        self.load_factor = load_factor;
    }

    /// Removes all elements and resets the table to a single empty bucket.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// for n in 0..10u64 {
    ///     table.entry(n, |&v: &u64| v == n).or_insert(n);
    /// }
    /// assert!(table.bucket_count() > 1);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.bucket_count(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.buckets = empty_buckets(1);
        self.populated = 0;
    }

    /// Returns an iterator over all values in the table, starting at the first
    /// entry of the first non-empty bucket.
    ///
    /// Values are yielded in bucket order, then chain order. The order is not
    /// sorted and changes whenever the table rebuilds.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.buckets, 0, 0)
    }

    /// Returns a mutable iterator over all values in the table.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut::new(&mut self.buckets, 0, 0)
    }

    /// Returns the canonical end iterator: positioned past the last entry of
    /// the last bucket, it never yields anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(7, |&n: &u64| n == 7).or_insert(7);
    ///
    /// let mut iter = table.iter();
    /// assert_eq!(iter.next(), Some(&7));
    /// assert_eq!(iter, table.end());
    /// ```
    pub fn end(&self) -> Iter<'_, V> {
        let last = self.buckets.len() - 1;
        Iter::new(&self.buckets, last, self.buckets[last].len())
    }

    /// Returns an iterator that removes and yields all values from the table.
    ///
    /// The table is reset to a single empty bucket as soon as `drain` is
    /// called; values not consumed from the iterator are dropped with it.
    pub fn drain(&mut self) -> Drain<'_, V> {
        let buckets = core::mem::replace(&mut self.buckets, empty_buckets(1));
        let populated = core::mem::replace(&mut self.populated, 0);
        Drain {
            inner: IntoIter::new(buckets, populated),
            _marker: PhantomData,
        }
    }

    /// Finds a value by its hash and an equality predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::Hash;
    /// # use core::hash::Hasher;
    /// #
    /// # use chain_hash::hash_table::HashTable;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # fn hash_str(s: &str) -> u64 {
    /// #     let mut hasher = SipHasher::new();
    /// #     s.hash(&mut hasher);
    /// #     hasher.finish()
    /// # }
    /// #
    /// let mut table = HashTable::new();
    /// table
    ///     .entry(hash_str("key"), |s: &String| s == "key")
    ///     .or_insert("key".to_string());
    ///
    /// assert_eq!(
    ///     table.find(hash_str("key"), |s| s == "key"),
    ///     Some(&"key".to_string())
    /// );
    /// assert_eq!(table.find(hash_str("missing"), |s| s == "missing"), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let (bucket, slot) = self.locate(hash, eq);
        Some(&self.buckets[bucket][slot?].1)
    }

    /// Finds a value by its hash and an equality predicate, returning a
    /// mutable reference.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let (bucket, slot) = self.locate(hash, eq);
        Some(&mut self.buckets[bucket][slot?].1)
    }

    /// Returns an iterator positioned at the matching value, or [`end`] when
    /// nothing matches.
    ///
    /// Iterating from the returned position continues through the rest of
    /// the table in traversal order.
    ///
    /// [`end`]: HashTable::end
    pub fn find_iter(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Iter<'_, V> {
        match self.locate(hash, eq) {
            (bucket, Some(slot)) => Iter::new(&self.buckets, bucket, slot),
            (_, None) => self.end(),
        }
    }

    /// Mutable variant of [`find_iter`](HashTable::find_iter).
    pub fn find_iter_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> IterMut<'_, V> {
        let (bucket, slot) = match self.locate(hash, eq) {
            (bucket, Some(slot)) => (bucket, slot),
            (_, None) => {
                let last = self.buckets.len() - 1;
                (last, self.buckets[last].len())
            }
        };
        IterMut::new(&mut self.buckets, bucket, slot)
    }

    /// Removes and returns a value from the table.
    ///
    /// The value's chain keeps the relative order of its remaining entries.
    /// Removing may trigger a rebuild when the table becomes too sparse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(42, |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    ///
    /// // Removing a missing value is a no-op
    /// assert_eq!(table.remove(99, |&n| n == 99), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        match self.entry(hash, eq) {
            Entry::Occupied(entry) => Some(entry.remove()),
            Entry::Vacant(_) => None,
        }
    }

    /// Gets the entry for the value matching `hash` and `eq` for in-place
    /// manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    ///
    /// match table.entry(5, |&n: &u64| n == 5) {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert(5);
    ///     }
    ///     Entry::Occupied(_) => unreachable!(),
    /// }
    ///
    /// assert!(matches!(table.entry(5, |&n| n == 5), Entry::Occupied(_)));
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        match self.locate(hash, eq) {
            (bucket, Some(slot)) => Entry::Occupied(OccupiedEntry {
                table: self,
                bucket,
                slot,
            }),
            (_, None) => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Returns the bucket `hash` maps to and, if present, the matching slot in
    /// its chain.
    fn locate(&self, hash: u64, eq: impl Fn(&V) -> bool) -> (usize, Option<usize>) {
        let bucket = bucket_index(hash, self.buckets.len());
        let slot = self.buckets[bucket]
            .iter()
            .position(|(stored, value)| *stored == hash && eq(value));
        (bucket, slot)
    }

    fn fit_load(&mut self) {
        if let Some(bucket_count) = self
            .load_factor
            .rebuild_target(self.populated, self.buckets.len())
        {
            self.rebuild(bucket_count, None);
        }
    }

    /// Moves every entry into a fresh bucket array of `bucket_count` chains.
    ///
    /// Returns the new position of the entry at `tracked`, if given.
    #[cold]
    fn rebuild(
        &mut self,
        bucket_count: usize,
        tracked: Option<(usize, usize)>,
    ) -> Option<(usize, usize)> {
        debug_assert!(bucket_count >= 1);

        let old = core::mem::replace(&mut self.buckets, empty_buckets(bucket_count));
        let mut relocated = None;
        for (old_bucket, chain) in old.into_iter().enumerate() {
            for (old_slot, (hash, value)) in chain.into_iter().enumerate() {
                let bucket = bucket_index(hash, bucket_count);
                let chain = &mut self.buckets[bucket];
                chain.push((hash, value));
                if tracked == Some((old_bucket, old_slot)) {
                    relocated = Some((bucket, chain.len() - 1));
                }
            }
        }

        debug_assert_eq!(
            self.populated,
            self.buckets.iter().map(Vec::len).sum::<usize>()
        );
        relocated
    }

    /// Returns a histogram of chain lengths: `hist[n]` is the number of
    /// buckets whose chain holds exactly `n` entries.
    ///
    /// Available in tests and with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let longest = self.buckets.iter().map(Vec::len).max().unwrap_or(0);
        let mut hist = vec![0usize; longest + 1];
        for chain in &self.buckets {
            hist[chain.len()] += 1;
        }
        hist
    }

    /// Returns detailed utilization statistics for debugging.
    ///
    /// Available in tests and with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let slot_size = core::mem::size_of::<(u64, V)>();
        let bucket_count = self.buckets.len();
        let empty_buckets = self.buckets.iter().filter(|c| c.is_empty()).count();
        let reserved_slots = self.buckets.iter().map(Vec::capacity).sum::<usize>();

        DebugStats {
            populated: self.populated,
            bucket_count,
            empty_buckets,
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
            load_factor: self.populated as f64 / bucket_count as f64,
            bucket_utilization: (bucket_count - empty_buckets) as f64 / bucket_count as f64,
            total_bytes: self.buckets.capacity() * core::mem::size_of::<Chain<V>>()
                + reserved_slots * slot_size,
            wasted_bytes: (reserved_slots - self.populated) * slot_size,
        }
    }

    /// Pretty-prints the chain-length histogram horizontally using stdout.
    ///
    /// Requires the `std` feature. Each row is a chain length, each bar the
    /// number of buckets with a chain that long.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_chain_histogram(&self) {
        let hist = self.chain_histogram();
        let max = hist.iter().copied().max().unwrap_or(0);

        let max_bar = 60usize;
        println!(
            "chain histogram ({} entries, {} buckets):",
            self.populated,
            self.buckets.len()
        );

        for (len, &count) in hist.iter().enumerate() {
            let width = if max == 0 {
                0
            } else {
                (count * max_bar).div_ceil(max)
            };
            println!("{:>3} | {} ({})", len, "█".repeat(width), count);
        }
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry - nothing in the table matches
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - a matching value is present in the table
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    ///
    /// let value = table.entry(1, |&n: &u64| n == 1).or_insert(1);
    /// assert_eq!(*value, 1);
    ///
    /// // The existing value is kept
    /// let existing = table.entry(1, |&n: &u64| n == 1).or_insert(2);
    /// assert_eq!(*existing, 1);
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference to the value in the entry.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to an occupied entry and returns a mutable reference to it.
    /// Returns `None` without inserting anything if the entry is vacant.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Option<&'a mut V> {
        match self {
            Entry::Occupied(entry) => {
                let value = entry.into_mut();
                f(&mut *value);
                Some(value)
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Inserts `V::default()` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the hash table.
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Appends the value to its chain and returns a mutable reference to it.
    ///
    /// The insertion may rebuild the table; the returned reference points at
    /// the value's slot after the rebuild.
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        let bucket = bucket_index(self.hash, table.buckets.len());
        let chain = &mut table.buckets[bucket];
        chain.push((self.hash, value));
        let mut position = (bucket, chain.len() - 1);
        table.populated += 1;

        if let Some(bucket_count) = table
            .load_factor
            .rebuild_target(table.populated, table.buckets.len())
        {
            position = table
                .rebuild(bucket_count, Some(position))
                .unwrap_or(position);
        }

        let (bucket, slot) = position;
        &mut table.buckets[bucket][slot].1
    }
}

/// A view into an occupied entry in the hash table.
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    bucket: usize,
    slot: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.table.buckets[self.bucket][self.slot].1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.table.buckets[self.bucket][self.slot].1
    }

    /// Converts the entry into a mutable reference to the value with the
    /// lifetime of the entry.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.table.buckets[self.bucket][self.slot].1
    }

    /// Removes the entry from the table and returns the value.
    ///
    /// Entries after it in the same chain shift down by one slot, keeping
    /// their relative order.
    pub fn remove(self) -> V {
        let (_, value) = self.table.buckets[self.bucket].remove(self.slot);
        self.table.populated -= 1;
        self.table.fit_load();
        value
    }
}

/// An iterator over the values in a [`HashTable`].
///
/// The iterator is a two-level cursor: a bucket index and a slot index into
/// that bucket's chain. It is kept normalized, so unless it is at the
/// canonical end it always points at a live value. Two iterators compare equal
/// when their positions match.
///
/// This struct is created by [`HashTable::iter`], [`HashTable::find_iter`] and
/// [`HashTable::end`].
pub struct Iter<'a, V> {
    buckets: &'a [Chain<V>],
    bucket: usize,
    slot: usize,
}

impl<'a, V> Iter<'a, V> {
    fn new(buckets: &'a [Chain<V>], bucket: usize, slot: usize) -> Self {
        let mut iter = Self {
            buckets,
            bucket,
            slot,
        };
        iter.normalize();
        iter
    }

    /// Skips forward past exhausted chains, stopping at the last bucket.
    #[inline]
    fn normalize(&mut self) {
        let last = self.buckets.len() - 1;
        while self.slot == self.buckets[self.bucket].len() && self.bucket != last {
            self.bucket += 1;
            self.slot = 0;
        }
    }

    /// Returns the value under the cursor without advancing, or `None` at the
    /// end.
    pub fn get(&self) -> Option<&'a V> {
        let buckets = self.buckets;
        buckets[self.bucket].get(self.slot).map(|(_, value)| value)
    }

    /// Returns the `(bucket, slot)` pair the cursor is at.
    pub fn position(&self) -> (usize, usize) {
        (self.bucket, self.slot)
    }

    /// Returns `true` if the iterator is at the canonical end.
    pub fn is_end(&self) -> bool {
        self.get().is_none()
    }
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets,
            bucket: self.bucket,
            slot: self.slot,
        }
    }
}

impl<V> PartialEq for Iter<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.bucket == other.bucket && self.slot == other.slot
    }
}

impl<V> Eq for Iter<'_, V> {}

impl<V> Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("bucket", &self.bucket)
            .field("slot", &self.slot)
            .finish()
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.slot += 1;
        self.normalize();
        Some(value)
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

/// A mutable iterator over the values in a [`HashTable`].
///
/// Behaves like [`Iter`] but hands out `&mut V`. It holds the unvisited tail
/// of the current chain and the remaining buckets, so it never aliases a
/// value it has already yielded.
pub struct IterMut<'a, V> {
    chains: core::slice::IterMut<'a, Chain<V>>,
    chain: &'a mut [(u64, V)],
    bucket: usize,
    slot: usize,
}

impl<'a, V> IterMut<'a, V> {
    fn new(buckets: &'a mut [Chain<V>], bucket: usize, slot: usize) -> Self {
        let mut chains = buckets[bucket..].iter_mut();
        let chain = match chains.next() {
            Some(chain) => &mut chain[slot..],
            None => &mut [],
        };
        let mut iter = Self {
            chains,
            chain,
            bucket,
            slot,
        };
        iter.normalize();
        iter
    }

    #[inline]
    fn normalize(&mut self) {
        while self.chain.is_empty() {
            let Some(next) = self.chains.next() else {
                break;
            };
            self.chain = next.as_mut_slice();
            self.bucket += 1;
            self.slot = 0;
        }
    }

    /// Returns the value under the cursor without advancing.
    pub fn get(&self) -> Option<&V> {
        self.chain.first().map(|(_, value)| value)
    }

    /// Returns the value under the cursor mutably without advancing.
    pub fn get_mut(&mut self) -> Option<&mut V> {
        self.chain.first_mut().map(|(_, value)| value)
    }

    /// Returns the `(bucket, slot)` pair the cursor is at.
    pub fn position(&self) -> (usize, usize) {
        (self.bucket, self.slot)
    }

    /// Returns `true` if the iterator is at the canonical end.
    pub fn is_end(&self) -> bool {
        self.chain.is_empty()
    }
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        let chain = core::mem::take(&mut self.chain);
        let ((_, value), rest) = chain.split_first_mut()?;
        self.chain = rest;
        self.slot += 1;
        self.normalize();
        Some(value)
    }
}

impl<V> FusedIterator for IterMut<'_, V> {}

/// An owning iterator over the values of a [`HashTable`].
pub struct IntoIter<V> {
    chains: vec::IntoIter<Chain<V>>,
    chain: vec::IntoIter<(u64, V)>,
    remaining: usize,
}

impl<V> IntoIter<V> {
    fn new(buckets: Vec<Chain<V>>, populated: usize) -> Self {
        Self {
            chains: buckets.into_iter(),
            chain: Vec::new().into_iter(),
            remaining: populated,
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((_, value)) = self.chain.next() {
                self.remaining -= 1;
                return Some(value);
            }
            self.chain = self.chains.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<V> IntoIterator for HashTable<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buckets, self.populated)
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut HashTable<V> {
    type Item = &'a mut V;
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A draining iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`].
///
/// [`drain`]: HashTable::drain
pub struct Drain<'a, V> {
    inner: IntoIter<V>,
    _marker: PhantomData<&'a mut HashTable<V>>,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Drain<'_, V> {}

impl<V> FusedIterator for Drain<'_, V> {}
