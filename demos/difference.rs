use elemfn::factory::FunctionFactory;
use elemfn::{find_root, Error, Function};

fn main() -> Result<(), Error> {
    let factory = FunctionFactory::new();

    let g = factory.create_from("polynomial", &[3.0, -1.0, 3.0, 4.0, 5.0])?;
    let h = factory.create_with("exp", 2.0)?;
    let f = &g - &h;

    println!("{}", g);
    println!("{}", h);
    println!("{}", f);

    let x = find_root(&f, 3.0, 100_000, 1e-9);
    println!("x = {}\tf(x) = {}", x, f.eval(x));

    Ok(())
}
