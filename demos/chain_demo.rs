use matrik::{ChainMultiply, MatError, Matrix, Operand, log_step};

fn main() -> Result<(), MatError> {
    env_logger::init();

    let mut a = Matrix::new(3, 4, (1..=12).collect::<Vec<i64>>())?;
    let b = Matrix::new(4, 3, (1..=12).collect::<Vec<i64>>())?;
    println!("A\n{a}");
    println!("B\n{b}");

    let c = (&a * &b)?;
    println!("C = A * B\n{c}");

    println!("Transposing A");
    a.transpose();
    println!("{a}");

    println!("A * 3 * 3 * 3 * 3");
    a.multiply_traced(&[Operand::Scalar(3); 4], true)?;

    let mut d = Matrix::new(3, 3, vec![12, 11, 10, 130, 10, 9, 3, 87, 12])?;
    let e = d.deep_copy();
    d.power_traced(2, true)?;
    println!("D^2\n{}", d.beautify());

    let f = (&d * &e)?;
    println!("F = D^2 * E\n{}", f.beautify());

    // same chain, reported through the logger (RUST_LOG=info)
    let mut g = e.clone();
    ChainMultiply::new([Operand::Matrix(&e), Operand::Scalar(-1)])
        .with_monitor(log_step::<i64>)
        .apply(&mut g)?;

    match &c + &b {
        Ok(sum) => println!("C + B\n{sum}"),
        Err(err) => println!("C + B failed: {err}"),
    }
    Ok(())
}
