use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::FusedIterator;

use crate::DefaultHashBuilder;
use crate::Error;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;
use crate::hash_table::LoadFactor;

/// A hash map implemented using the separate-chaining `HashTable` as the
/// underlying storage.
///
/// `HashMap<K, V, S>` stores key-value pairs where keys implement `Hash + Eq`
/// and uses a configurable hasher builder `S` to hash keys. Each key's hash is
/// computed once, on insertion, and stored next to the entry.
///
/// Inserting a key that is already present leaves the stored value untouched.
/// Use [`get_mut`], [`get_or_default`] or the [`entry`] API to update a value.
///
/// # Rebuilds
///
/// After every insertion and removal the map checks its [`LoadFactor`]
/// thresholds and may rebuild its bucket array at twice or half the size. The
/// borrow checker rules out holding a reference or iterator into the map
/// across such a mutation.
///
/// [`get_mut`]: HashMap::get_mut
/// [`get_or_default`]: HashMap::get_or_default
/// [`entry`]: HashMap::entry
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    table: HashTable<(K, V)>,
    hash_builder: S,
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let mut map: HashMap<i32, &str> = HashMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of buckets in the map's bucket array.
    ///
    /// A map always has at least one bucket.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let mut map: HashMap<i32, i32> = HashMap::new();
    /// assert_eq!(map.bucket_count(), 1);
    ///
    /// for i in 0..5 {
    ///     map.insert(i, i);
    /// }
    /// assert_eq!(map.bucket_count(), 8);
    /// ```
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Returns a reference to the map's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns the thresholds currently driving rebuilds.
    pub fn load_factor(&self) -> LoadFactor {
        self.table.load_factor()
    }

    /// Replaces both rebuild thresholds. Takes effect on the next insertion
    /// or removal.
    pub fn set_load_factor(&mut self, load_factor: LoadFactor) {
        self.table.set_load_factor(load_factor);
    }

    /// Returns the upper-bound threshold (`n * max_load > buckets` grows the
    /// map).
    pub fn max_load(&self) -> usize {
        self.table.load_factor().max_load
    }

    /// Returns the lower-bound threshold (`n * min_load < buckets` shrinks
    /// the map).
    pub fn min_load(&self) -> usize {
        self.table.load_factor().min_load
    }

    /// Sets the upper-bound threshold. The map is not rebuilt until the next
    /// insertion or removal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let mut map: HashMap<i32, i32> = HashMap::new();
    /// map.set_max_load(2);
    /// assert_eq!(map.max_load(), 2);
    /// assert_eq!(map.min_load(), 8);
    /// ```
    pub fn set_max_load(&mut self, max_load: usize) {
        let load_factor = LoadFactor {
            max_load,
            ..self.table.load_factor()
        };
        self.table.set_load_factor(load_factor);
    }

    /// Sets the lower-bound threshold. The map is not rebuilt until the next
    /// insertion or removal.
    pub fn set_min_load(&mut self, min_load: usize) {
        let load_factor = LoadFactor {
            min_load,
            ..self.table.load_factor()
        };
        self.table.set_load_factor(load_factor);
    }

    /// Removes all elements and resets the map to a single empty bucket.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let mut map = HashMap::<i32, &str>::new();
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.bucket_count(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over the key-value pairs of the map, in bucket
    /// order then chain order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let map: HashMap<i32, &str> = HashMap::from([(1, "a"), (2, "b")]);
    ///
    /// let mut pairs = map.iter().collect::<Vec<_>>();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the key-value pairs of the map, with mutable
    /// references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Returns the canonical end iterator, which compares equal to any
    /// exhausted iterator and to the result of a failed [`find`].
    ///
    /// [`find`]: HashMap::find
    pub fn end(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.end(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable references to the values of the map.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Clears the map, returning all key-value pairs as an iterator.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Returns a histogram of chain lengths: `hist[n]` is the number of
    /// buckets holding exactly `n` entries.
    #[cfg(feature = "stats")]
    pub fn chain_histogram(&self) -> alloc::vec::Vec<usize> {
        self.table.chain_histogram()
    }

    /// Returns detailed utilization statistics for debugging.
    #[cfg(feature = "stats")]
    pub fn debug_stats(&self) -> crate::hash_table::DebugStats {
        self.table.debug_stats()
    }

    /// Pretty-prints the chain-length histogram using stdout.
    #[cfg(all(feature = "stats", feature = "std"))]
    pub fn print_chain_histogram(&self) {
        self.table.print_chain_histogram();
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a new hash map with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::HashMap;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let map: HashMap<i32, String, _> = HashMap::with_hasher(SimpleHasher);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_load_factor_and_hasher(LoadFactor::default(), hash_builder)
    }

    /// Creates a new hash map with the given rebuild thresholds and hasher
    /// builder.
    pub fn with_load_factor_and_hasher(load_factor: LoadFactor, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_load_factor(load_factor),
            hash_builder,
        }
    }

    /// Inserts a key-value pair into the map if the key is not present.
    ///
    /// Returns `true` if the pair was inserted. If the key was already
    /// present, the map is left unchanged, `value` is dropped and `false` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let mut map = HashMap::<i32, &str>::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map.get(&37), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find_mut(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key, or
    /// [`Error::NotFound`] if the key is absent. Never inserts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::Error;
    /// # use chain_hash::HashMap;
    /// #
    /// let map: HashMap<i32, &str> = HashMap::from([(1, "a")]);
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(Error::NotFound));
    /// ```
    pub fn at(&self, key: &K) -> Result<&V, Error> {
        self.get(key).ok_or(Error::NotFound)
    }

    /// Returns a mutable reference to the value for `key`, inserting
    /// `V::default()` first if the key is absent.
    ///
    /// The insertion may rebuild the map; the returned reference is located
    /// after the rebuild and stays valid until the next mutation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let mut counts: HashMap<&str, u32> = HashMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_default(word) += 1;
    /// }
    /// assert_eq!(counts.get(&"a"), Some(&2));
    /// assert_eq!(counts.get(&"b"), Some(&1));
    /// ```
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }

    /// Removes a key from the map, returning the value if it was present.
    ///
    /// The remaining entries of the key's chain keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let mut map: HashMap<i32, &str> = HashMap::from([(1, "a")]);
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k == key)
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let mut map: HashMap<&str, Vec<i32>> = HashMap::new();
    /// map.entry("a").or_default().push(1);
    /// map.entry("a").or_default().push(2);
    /// assert_eq!(map.get(&"a"), Some(&vec![1, 2]));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Returns an iterator positioned at `key`, or [`end`] if the key is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let map: HashMap<i32, &str> = HashMap::from([(1, "a"), (2, "b")]);
    ///
    /// assert_eq!(map.find(&2).get(), Some((&2, &"b")));
    /// assert_eq!(map.find(&10), map.end());
    /// ```
    ///
    /// [`end`]: HashMap::end
    pub fn find(&self, key: &K) -> Iter<'_, K, V> {
        let hash = self.hash_builder.hash_one(key);
        Iter {
            inner: self.table.find_iter(hash, |(k, _)| k == key),
        }
    }

    /// Returns a mutable iterator positioned at `key`, or at the end if the
    /// key is absent.
    pub fn find_mut(&mut self, key: &K) -> IterMut<'_, K, V> {
        let hash = self.hash_builder.hash_one(key);
        IterMut {
            inner: self.table.find_iter_mut(hash, |(k, _)| k == key),
        }
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates a new hash map using the default hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let map: HashMap<i32, String> = HashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts every pair in order. A key already in the map, or repeated
    /// later in the sequence, keeps its first value.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, S, const N: usize> From<[(K, V); N]> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Builds a map from a list of pairs. Duplicate keys keep their first
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashMap;
    /// #
    /// let map: HashMap<i32, &str> = HashMap::from([(1, "x"), (1, "y")]);
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.at(&1), Ok(&"x"));
    /// ```
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashMap`].
///
/// [`entry`]: HashMap::entry
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the map.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    ///
    /// The reference is located after any rebuild the insertion triggers.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied entry in the map.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Replaces the value in the entry and returns the old value.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }

    /// Removes the entry from the map and returns the value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry from the map and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
///
/// Also serves as a cursor: [`get`](Iter::get) reads the pair under it without
/// advancing, and two iterators over the same map compare equal when they
/// sit at the same position.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Returns the pair under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        self.inner.get().map(|(k, v)| (k, v))
    }

    /// Returns the `(bucket, slot)` pair the cursor is at.
    pub fn position(&self) -> (usize, usize) {
        self.inner.position()
    }

    /// Returns `true` if the iterator is at the canonical end.
    pub fn is_end(&self) -> bool {
        self.inner.is_end()
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> PartialEq for Iter<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V> Eq for Iter<'_, K, V> {}

impl<K, V> Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.inner.fmt(f)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A mutable iterator over the key-value pairs of a `HashMap`.
///
/// Keys are only ever handed out by shared reference.
pub struct IterMut<'a, K, V> {
    inner: crate::hash_table::IterMut<'a, (K, V)>,
}

impl<K, V> IterMut<'_, K, V> {
    /// Returns the pair under the cursor without advancing.
    pub fn get(&self) -> Option<(&K, &V)> {
        self.inner.get().map(|(k, v)| (k, v))
    }

    /// Returns the pair under the cursor, with the value mutable, without
    /// advancing.
    pub fn get_mut(&mut self) -> Option<(&K, &mut V)> {
        self.inner.get_mut().map(|(k, v)| (&*k, v))
    }

    /// Returns the `(bucket, slot)` pair the cursor is at.
    pub fn position(&self) -> (usize, usize) {
        self.inner.position()
    }

    /// Returns `true` if the iterator is at the canonical end.
    pub fn is_end(&self) -> bool {
        self.inner.is_end()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

/// A mutable iterator over the values of a `HashMap`.
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

/// A draining iterator over the key-value pairs of a `HashMap`.
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Drain<'a, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Drain<'_, K, V> {}

/// An owning iterator over the key-value pairs of a `HashMap`.
pub struct IntoIter<K, V> {
    inner: crate::hash_table::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
