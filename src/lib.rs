// special lint
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
// rust compiler lints
#![deny(unused_must_use)]
#![warn(missing_debug_implementations)]

mod array;
mod error;
mod growth;
mod iter;
mod raw_buf;

pub(crate) use raw_buf::RawBuf;
pub use {
    array::GrowableArray,
    error::{Error, Result},
    growth::{DoublePlusOne, GrowthPolicy, OneAndHalf},
    iter::{IntoIter, SeqIter},
};

fn _assertion() {
    fn assert_sync_send<T: Sync + Send>() {}

    assert_sync_send::<GrowableArray<()>>();
    assert_sync_send::<GrowableArray<String, OneAndHalf>>();
    assert_sync_send::<IntoIter<()>>();
}

#[test]
fn miri() {
    pub fn inner<G: GrowthPolicy>(mut array: GrowableArray<String, G>, val: String) -> Result<()> {
        const PUSH: usize = if cfg!(miri) { 100 } else { 10_000 };

        for _ in 0..PUSH {
            array.push_back(val.clone())?;
        }
        assert!(array.iter().all(|item| *item == val));

        for i in (0..PUSH).step_by(7) {
            array.insert(i, val.clone())?;
        }
        for _ in 0..PUSH / 2 {
            array.erase(0)?;
        }
        array.shrink_to_fit()?;
        assert_eq!(array.len(), array.capacity());

        array.clear();
        assert_eq!(array.len(), 0);

        Ok(())
    }

    let val = "foo".to_string();

    inner(GrowableArray::new(), val.clone()).unwrap();
    inner(GrowableArray::<_, OneAndHalf>::with_policy(), val).unwrap();
}
