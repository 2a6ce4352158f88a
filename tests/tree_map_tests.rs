//! Integration tests for TreeMap.

use rbmap::prelude::*;
use rstest::rstest;

fn sample_map() -> TreeMap<i32, &'static str> {
    let mut map = TreeMap::new();
    map.put(5, "e");
    map.put(6, "f");
    map.put(7, "g");
    map.put(3, "c");
    map.put(4, "d");
    map.put(1, "x");
    map.put(2, "b");
    map.put(1, "a");
    map
}

#[rstest]
fn test_put_and_get() {
    let map = sample_map();
    assert_eq!(map.len(), 7);
    assert_eq!(map.keys(), vec![&1, &2, &3, &4, &5, &6, &7]);
    assert_eq!(map.values(), vec![&"a", &"b", &"c", &"d", &"e", &"f", &"g"]);
    assert_eq!(map.get(&1), Some(&"a"));
    assert_eq!(map.get(&8), None);
    assert!(map.contains_key(&7));
}

#[rstest]
fn test_remove() {
    let mut map = sample_map();
    for key in [5, 6, 7, 8, 5] {
        map.remove(&key);
    }
    assert_eq!(map.keys(), vec![&1, &2, &3, &4]);
    assert_eq!(map.len(), 4);

    map.clear();
    assert!(map.is_empty());
}

#[rstest]
fn test_min_and_max() {
    let map = sample_map();
    assert_eq!(map.min(), Some((&1, &"a")));
    assert_eq!(map.max(), Some((&7, &"g")));
}

#[rstest]
#[case(0, None, Some((1, "a")))]
#[case(4, Some((4, "d")), Some((4, "d")))]
#[case(8, Some((7, "g")), None)]
fn test_floor_and_ceiling(
    #[case] probe: i32,
    #[case] floor: Option<(i32, &str)>,
    #[case] ceiling: Option<(i32, &str)>,
) {
    let map = sample_map();
    assert_eq!(map.floor(&probe).map(|(key, value)| (*key, *value)), floor);
    assert_eq!(map.ceiling(&probe).map(|(key, value)| (*key, *value)), ceiling);
}

#[rstest]
fn test_iteration() {
    let map = sample_map();

    let forward: Vec<i32> = map.iter().map(|(key, _)| *key).collect();
    assert_eq!(forward, vec![1, 2, 3, 4, 5, 6, 7]);

    let mut cursor = map.iterator();
    assert!(cursor.last());
    assert_eq!(cursor.entry(), Some((&7, &"g")));
    assert!(cursor.prev_to(|key, _| key % 2 == 0));
    assert_eq!(cursor.key(), Some(&6));

    let mut total = 0;
    for (key, _) in &map {
        total += key;
    }
    assert_eq!(total, 28);
}

#[rstest]
fn test_reverse_ordered_map() {
    let mut map = TreeMap::with_comparator(ReverseComparator::new(OrdComparator));
    map.extend([(1, "one"), (3, "three"), (2, "two")]);
    assert_eq!(map.min(), Some((&3, &"three")));
    assert_eq!(map.to_string(), "{3: three, 2: two, 1: one}");
}

#[rstest]
fn test_equality_and_debug() {
    let first: TreeMap<i32, i32> = [(2, 20), (1, 10)].into_iter().collect();
    let second: TreeMap<i32, i32> = [(1, 10), (2, 20)].into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(format!("{first:?}"), "{1: 10, 2: 20}");
    assert_eq!(TreeMap::<i32, i32>::default(), TreeMap::new());
}
