use {
    platform_vec::{GrowableArray, Result},
    tracing_subscriber::EnvFilter,
};

fn print(array: &GrowableArray<i32>) {
    print!("sz: {}, cap: {}, v: ", array.len(), array.capacity());
    let (mut it, end) = (array.begin(), array.end());
    while it != end {
        if let Some(item) = it.get() {
            print!("{item} ");
        }
        it.advance();
    }
    println!();
}

fn main() -> Result<()> {
    // `RUST_LOG=platform_vec=trace` shows every reallocation
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut array = GrowableArray::new();
    for i in 1..=4 {
        array.push_back(i)?;
    }
    print(&array);

    array.erase(0)?;
    array.pop_back()?;
    array.push_back(5)?;
    print(&array);

    Ok(())
}
