//! Tests for element-wise addition/subtraction, scalar multiplication and the matrix product.
//!
//! Both the in-place methods and the operator forms are covered. Integer cases are
//! compared exactly; float cases use `approx` with a tight tolerance. Random matrices
//! come from `rand`.

use approx::assert_relative_eq;
use matrik::{MatError, Matrix};
use rand::Rng;

/// Build a random `rows x cols` integer matrix with small entries.
fn random_int(rows: usize, cols: usize, rng: &mut impl Rng) -> Matrix<i64> {
    Matrix::from_fn(rows, cols, |_, _| rng.gen_range(-50..50)).unwrap()
}

/// Build a random `rows x cols` float matrix with entries in [0, 1).
fn random_f64(rows: usize, cols: usize, rng: &mut impl Rng) -> Matrix<f64> {
    Matrix::from_fn(rows, cols, |_, _| rng.r#gen()).unwrap()
}

/// Test `(A + B) - B == A` exactly for random integer matrices.
#[test]
fn add_then_subtract_round_trips() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let (r, c) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = random_int(r, c, &mut rng);
        let b = random_int(r, c, &mut rng);
        let sum = (&a + &b).unwrap();
        assert_eq!((&sum - &b).unwrap(), a);
    }
}

/// Test that the operator forms leave both operands untouched.
#[test]
fn operators_do_not_mutate_operands() {
    let a = Matrix::new(2, 2, vec![1i32, 2, 3, 4]).unwrap();
    let b = Matrix::new(2, 2, vec![10i32, 20, 30, 40]).unwrap();
    let (a0, b0) = (a.clone(), b.clone());

    let c = (&a + &b).unwrap();
    let d = (&b - &a).unwrap();
    let e = (&a * &b).unwrap();
    let f = &a * 3;

    assert_eq!(c.as_slice(), &[11, 22, 33, 44]);
    assert_eq!(d.as_slice(), &[9, 18, 27, 36]);
    assert_eq!(e.as_slice(), &[70, 100, 150, 220]);
    assert_eq!(f.as_slice(), &[3, 6, 9, 12]);
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

/// Test the in-place forms against the operator forms.
#[test]
fn in_place_matches_operators() {
    let a = Matrix::new(2, 3, vec![1i32, 2, 3, 4, 5, 6]).unwrap();
    let b = Matrix::new(2, 3, vec![6i32, 5, 4, 3, 2, 1]).unwrap();

    let mut x = a.clone();
    x.add(&b).unwrap();
    assert_eq!(x, (&a + &b).unwrap());

    let mut y = a.clone();
    y.subtract(&b).unwrap();
    assert_eq!(y, (a.clone() - b.clone()).unwrap());

    let mut z = a.clone();
    z.scale(-2);
    assert_eq!(z, -2 * &a);
    assert_eq!(-&a, &a * -1);
}

/// Test that a 2x3 plus a 3x2 fails and leaves the receiver unchanged.
#[test]
fn shape_mismatch_on_add_and_subtract() {
    let mut a = Matrix::new(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let b = Matrix::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let before = a.clone();

    assert!(matches!(&a + &b, Err(MatError::ShapeMismatch(_))));
    assert!(matches!(&a - &b, Err(MatError::ShapeMismatch(_))));
    assert!(matches!(a.add(&b), Err(MatError::ShapeMismatch(_))));
    assert!(matches!(a.subtract(&b), Err(MatError::ShapeMismatch(_))));
    assert_eq!(a, before);
}

/// Test the 3x4 by 4x3 product from a fixed example.
#[test]
fn product_of_three_by_four_and_four_by_three() {
    let a = Matrix::new(3, 4, (1..=12).collect::<Vec<i64>>()).unwrap();
    let b = Matrix::new(4, 3, (1..=12).collect::<Vec<i64>>()).unwrap();
    let c = (&a * &b).unwrap();
    assert_eq!(c.shape(), (3, 3));
    assert_eq!(
        c.to_rows(),
        vec![vec![70, 80, 90], vec![158, 184, 210], vec![246, 288, 330]]
    );
}

/// Test that non-chainable shapes are rejected.
#[test]
fn product_requires_chainable_shapes() {
    let a = Matrix::new(2, 3, vec![0i32; 6]).unwrap();
    assert!(matches!(&a * &a, Err(MatError::ShapeMismatch(_))));
    assert!(a.product(&a.transposed()).is_ok());
}

/// Test `A * 1 == A` for integers and floats.
#[test]
fn scalar_one_is_identity() {
    let mut rng = rand::thread_rng();
    let a = random_int(3, 5, &mut rng);
    assert_eq!(&a * 1, a);
    let f = random_f64(4, 2, &mut rng);
    assert_eq!(&f * 1.0, f);
}

/// Test associativity exactly for integers and within tolerance for floats.
#[test]
fn product_is_associative() {
    let mut rng = rand::thread_rng();
    let (p, q, r, s) = (3, 4, 2, 5);

    let a = random_int(p, q, &mut rng);
    let b = random_int(q, r, &mut rng);
    let c = random_int(r, s, &mut rng);
    let left = (&(&a * &b).unwrap() * &c).unwrap();
    let right = (&a * &(&b * &c).unwrap()).unwrap();
    assert_eq!(left, right);

    let a = random_f64(p, q, &mut rng);
    let b = random_f64(q, r, &mut rng);
    let c = random_f64(r, s, &mut rng);
    let left = a.product(&b).unwrap().product(&c).unwrap();
    let right = a.product(&b.product(&c).unwrap()).unwrap();
    assert_eq!(left.shape(), right.shape());
    assert_relative_eq!(left.as_slice(), right.as_slice(), epsilon = 1e-12);
}

/// Test that an integer matrix promoted with `cast` multiplies like the float original.
#[test]
fn promoted_product_matches_integer_product() {
    let a = Matrix::new(2, 2, vec![1i32, 2, 3, 4]).unwrap();
    let ints = (&a * &a).unwrap();
    let af: Matrix<f64> = a.cast().unwrap();
    let floats = (&af * 0.5).product(&af).unwrap();
    for (x, y) in ints.as_slice().iter().zip(floats.as_slice()) {
        assert_relative_eq!(*x as f64 * 0.5, *y, epsilon = 1e-12);
    }
}
