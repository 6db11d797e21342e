#![no_std]
extern crate alloc;
extern crate cache_rs;

use alloc::string::String;
use alloc::vec::Vec;
use cache_rs::LfuCache;

#[test]
fn lfu_works_with_heap_allocated_keys_and_values() {
    let mut cache = LfuCache::with_capacity(2);

    let key1 = String::from("key1");
    let key2 = String::from("key2");

    cache.put(key1.clone(), 1);
    cache.put(key2.clone(), 2);

    // Access key1 to raise its frequency above key2's.
    cache.get(&key1).unwrap();
    cache.get(&key1).unwrap();

    let key3 = String::from("key3");
    cache.put(key3.clone(), 3);

    assert_eq!(*cache.get(&key1).unwrap(), 1);
    assert!(cache.get(&key2).is_err());
    assert_eq!(*cache.get(&key3).unwrap(), 3);
}

#[test]
fn lfu_works_with_vec_keys_and_values() {
    let mut cache = LfuCache::with_capacity(2);

    let key1 = Vec::<u8>::from([1, 2, 3]);
    let value1 = Vec::<i32>::from([10, 20, 30]);

    let key2 = Vec::<u8>::from([4, 5, 6]);
    let value2 = Vec::<i32>::from([40, 50, 60]);

    cache.put(key1.clone(), value1.clone());
    cache.put(key2.clone(), value2.clone());

    assert_eq!(*cache.get(&key1).unwrap(), value1);
    assert_eq!(*cache.get(&key2).unwrap(), value2);
}

#[test]
fn lfu_default_capacity_and_clear_work_without_std() {
    let mut cache: LfuCache<String, i32> = LfuCache::new(None).unwrap();
    assert_eq!(cache.capacity(), 5);

    cache.put(String::from("a"), 1);
    cache.put(String::from("b"), 2);
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.get(&String::from("a")).is_err());
}
