//! Integration tests for the codebook tables with non-string label types.

use feature_encoders::{Codebook, UNKNOWN_CODE};

#[test]
fn integer_labels_are_supported() {
    let mut book = Codebook::new();
    for v in [10_i64, 5, 10, 0, 5] {
        book.observe(v);
    }

    assert_eq!(book.len(), 3);
    assert_eq!(book.code_for(&10), 1);
    assert_eq!(book.code_for(&5), 2);
    assert_eq!(book.code_for(&0), 3);
    assert_eq!(book.code_for(&7), UNKNOWN_CODE);
}

#[test]
fn tuple_labels_are_supported() {
    let mut book = Codebook::new();
    book.observe(("a", 1_u8));
    book.observe(("a", 2_u8));

    assert_eq!(book.code_for(&("a", 1)), 1);
    assert_eq!(book.code_for(&("a", 2)), 2);
    assert_eq!(book.label_for(2), Some(&("a", 2_u8)));
}

#[test]
fn forward_and_inverse_agree_for_every_assigned_code() {
    let mut book = Codebook::new();
    for v in 0..50_u32 {
        book.observe(v * 3);
    }

    for code in 1..=book.len() as u32 {
        let label = *book.label_for(code).expect("assigned code must invert");
        assert_eq!(book.code_for(&label), code);
    }
    assert_eq!(book.label_for(0), None);
    assert_eq!(book.label_for(book.len() as u32 + 1), None);
}
