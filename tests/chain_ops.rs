use chainmap::{ChainMap, ChainMapError, Layer};

fn layer<const N: usize>(entries: [(i32, &str); N]) -> Layer<i32, String> {
    entries.into_iter().map(|(k, v)| (k, v.to_string())).collect()
}

#[test]
fn override_wins_over_every_stack_layer() {
    let mut chain = ChainMap::with_layers(vec![layer([(1, "One")]), layer([(1, "Uno")])]);
    chain.insert(1, "Two".to_string()).unwrap();

    assert_eq!(chain.get(&1), Ok(&"Two".to_string()));
}

#[test]
fn set_on_a_stack_key_shadows_it() {
    // override {}, stack [{1: "One"}]
    let mut chain = ChainMap::with_layers(vec![layer([(1, "One")])]);

    chain.set(1, "X".to_string()).unwrap();

    assert_eq!(chain.get(&1), Ok(&"X".to_string()));
    assert_eq!(chain.override_layer().get(&1), Some(&"X".to_string()));
    assert_eq!(chain.layer(0).unwrap().get(&1), Some(&"One".to_string()));
}

#[test]
fn read_follows_write_for_resolvable_keys() {
    let mut chain = ChainMap::with_layers(vec![layer([(1, "One"), (2, "Two")])]);

    for (key, value) in [(1, "a"), (2, "b"), (1, "c")] {
        chain.set(key, value.to_string()).unwrap();
        assert_eq!(chain.get(&key), Ok(&value.to_string()));
    }
}

#[test]
fn remove_is_confined_to_the_override_layer() {
    // override {}, stack [{1: "One"}]
    let mut chain = ChainMap::with_layers(vec![layer([(1, "One")])]);

    assert_eq!(chain.remove(&1), None);
    assert_eq!(chain.get(&1), Ok(&"One".to_string()));

    chain.set(1, "X".to_string()).unwrap();
    assert_eq!(chain.remove(&1), Some("X".to_string()));
    assert_eq!(chain.get(&1), Ok(&"One".to_string()));

    let mut bare = ChainMap::<i32, String>::new();
    bare.insert(1, "only".to_string()).unwrap();
    assert_eq!(bare.remove(&1), Some("only".to_string()));
    assert_eq!(bare.get(&1), Err(ChainMapError::KeyNotFound));
}

#[test]
fn duplicate_detection_is_override_only() {
    let mut chain = ChainMap::with_layers(vec![layer([(1, "One")])]);

    // fine: the key only exists in a stack layer
    chain.insert(1, "Two".to_string()).unwrap();
    // not fine: the override layer now holds it
    assert_eq!(chain.insert(1, "Three".to_string()), Err(ChainMapError::DuplicateKey));
    assert!(!chain.try_insert(1, "Three".to_string()));
}

#[test]
fn adding_a_layer_at_priority_zero_reranks_lookups() {
    // override {1: "One"}, stack [{2: "Two"}, {3: "Three"}]
    let mut chain = ChainMap::with_layers(vec![layer([(2, "Two")]), layer([(3, "Three")])]);
    chain.insert(1, "One".to_string()).unwrap();

    chain.add_layer(layer([(2, "ZZ")]), 0).unwrap();

    assert_eq!(chain.get(&2), Ok(&"ZZ".to_string()));
    assert_eq!(chain.layer_count(), 3);
    assert_eq!(chain.layer(1).unwrap().get(&2), Some(&"Two".to_string()));
}

#[test]
fn merge_flattens_with_first_occurrence_winning() {
    let mut chain = ChainMap::with_layers(vec![
        layer([(2, "New Two"), (3, "Three")]),
        layer([(3, "Last Three"), (4, "Four")]),
    ]);
    chain.insert(1, "One".to_string()).unwrap();
    chain.insert(2, "Two".to_string()).unwrap();

    let flat = chain.merge();

    assert_eq!(flat.len(), 4);
    assert_eq!(flat.get(&1), Some(&"One".to_string()));
    assert_eq!(flat.get(&2), Some(&"Two".to_string()));
    assert_eq!(flat.get(&3), Some(&"Three".to_string()));
    assert_eq!(flat.get(&4), Some(&"Four".to_string()));
}

#[test]
fn count_sums_physical_entries() {
    let mut chain = ChainMap::with_layers(vec![
        layer([(1, "One"), (2, "Two")]),
        layer([(1, "Uno"), (3, "Three")]),
    ]);
    chain.insert(1, "Ein".to_string()).unwrap();

    let per_layer: usize = chain.override_layer().len()
        + chain.layers().map(|l| l.len()).sum::<usize>();
    assert_eq!(chain.len(), per_layer);
    assert_eq!(chain.len(), 5);
    assert!(chain.merge().len() <= chain.len());
}

#[test]
fn views_enumerate_override_then_stack() {
    let mut chain = ChainMap::with_layers(vec![layer([(2, "Two"), (3, "Three")])]);
    chain.insert(1, "One".to_string()).unwrap();

    let keys: Vec<i32> = chain.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3]);

    let values: Vec<String> = chain.values().cloned().collect();
    assert_eq!(values, vec!["One", "Two", "Three"]);

    let pairs: Vec<(i32, String)> = chain.iter().map(|(k, v)| (*k, v.clone())).collect();
    assert_eq!(
        pairs,
        vec![
            (1, "One".to_string()),
            (2, "Two".to_string()),
            (3, "Three".to_string()),
        ]
    );
}

#[test]
fn cleared_overrides_unshadow_the_stack() {
    let mut chain = ChainMap::with_layers(vec![layer([(1, "One")])]);
    chain.set(1, "X".to_string()).unwrap();
    chain.insert(2, "Two".to_string()).unwrap();

    chain.clear();

    assert_eq!(chain.get(&1), Ok(&"One".to_string()));
    assert!(!chain.contains_key(&2));
    assert_eq!(chain.layer_count(), 1);

    chain.clear_all();
    assert_eq!(chain.layer_count(), 0);
    assert!(chain.is_empty());
}

#[test]
fn layer_management_round_trip() {
    let mut chain = ChainMap::<i32, String>::new();
    assert_eq!(
        chain.add_layer(layer([(1, "One")]), 1),
        Err(ChainMapError::LayerIndexOutOfRange { index: 1, len: 0 })
    );

    chain.add_layer(layer([(1, "One")]), 0).unwrap();
    chain.add_layer(layer([(2, "Two")]), 1).unwrap();

    let removed = chain.remove_layer(0).unwrap();
    assert_eq!(removed.get(&1), Some(&"One".to_string()));
    assert_eq!(chain.get(&1), Err(ChainMapError::KeyNotFound));
    assert_eq!(chain.get(&2), Ok(&"Two".to_string()));
}
