use keyed_skiplist::SkipList;

#[global_allocator]
static ALLOCATOR: checkers::Allocator = checkers::Allocator::system();

#[checkers::test]
fn test_allocations() {
    let mut sk = SkipList::with_seed(15, 0.25, 11).unwrap();
    let _ = sk.search(10);
    let _ = sk.delete(10);

    for i in 0..50u32 {
        sk.insert(i, format!("value-{}", i));
    }
    sk.contains(13);
    sk.insert(13, String::from("overwritten"));
    for i in (0..50u32).step_by(2) {
        let _ = sk.delete(i);
    }
    // Freed slots are reused here.
    for i in 100..120u32 {
        sk.insert(i, i.to_string());
    }
    let _ = sk.search(101);
    let _ = sk.delete(999);
}

#[checkers::test]
fn test_drop_releases_everything() {
    let mut sk = SkipList::with_seed(8, 0.5, 5).unwrap();
    for i in 0..200u32 {
        sk.insert(i, vec![i; 4]);
    }
    drop(sk);
}
