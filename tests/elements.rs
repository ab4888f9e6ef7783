use {
    platform_vec::{GrowableArray, Result},
    std::fmt::Debug,
};

fn lifecycle<T: Clone + Default + PartialEq + Debug>(values: [T; 4]) -> Result<()> {
    let mut array = GrowableArray::new();
    for value in values.iter().cloned() {
        array.push_back(value)?;
    }
    assert_eq!(array.as_slice(), values.as_slice());
    assert_eq!(array.capacity(), 7);

    assert_eq!(array.erase(0)?, values[0]);
    assert_eq!(array.pop_back()?, values[3]);
    array.insert(0, values[3].clone())?;
    assert_eq!(array.as_slice(), [values[3].clone(), values[1].clone(), values[2].clone()]);

    array.reverse();
    assert_eq!(array.front()?, &values[2]);
    assert_eq!(array.back()?, &values[3]);

    array.resize(5)?;
    assert_eq!(array.at(4)?, &T::default());

    let copy = array.clone();
    array.assign(2, values[0].clone())?;
    assert_eq!(array.as_slice(), [values[0].clone(), values[0].clone()]);
    assert_eq!(copy.len(), 5);
    Ok(())
}

macro_rules! lifecycle_tests {
    ($($name:ident: $values:expr;)*) => {$(
        paste::paste! {
            #[test]
            fn [<lifecycle_ $name>]() -> Result<()> {
                lifecycle($values)
            }
        }
    )*};
}

lifecycle_tests! {
    u8: [1u8, 2, 3, 4];
    u64: [u64::MAX, 0, 7, 42];
    string: ["a", "bb", "ccc", "dddd"].map(String::from);
    boxed: [Box::new(1.5f32), Box::new(-2.0), Box::new(0.0), Box::new(9.25)];
    nested: [vec![1], vec![], vec![2, 3], vec![4, 5, 6]];
    unit: [(), (), (), ()];
}
