/// Run this example with cargo run --example simple
use keyed_skiplist::{Error, SkipList};

fn main() {
    // A fixed seed makes the level layout the same on every run
    let mut sk = SkipList::with_seed(4, 0.5, 7).unwrap();
    for &key in &[30u32, 40, 50, 60, 70, 90] {
        sk.insert(key, key * 10);
    }

    // print the skiplist, level by level
    println!("{:?}", sk);

    if let Ok(value) = sk.search(50) {
        println!("50 maps to {}", value);
    }

    // Inserting an existing key only replaces its value
    sk.insert(50, 5000);
    println!("50 now maps to {:?}", sk.search(50));

    if let Ok(value) = sk.delete(40) {
        println!("... removed 40 (it held {})", value);
    }
    if let Err(Error::NotFound(key)) = sk.search(40) {
        println!("{} is gone :C", key);
    }

    // The level ceiling can only change while the list is empty
    if let Err(e) = sk.set_level_ceiling(8) {
        println!("{}", e);
    }

    dbg!(sk.level(), sk.level_ceiling(), sk.is_empty());

    // Let's make a big skiplist
    let big: SkipList<u32> = (0..1000u32).map(|i| (i, i * i)).collect();
    dbg!(big.search(999), big.level());
}
