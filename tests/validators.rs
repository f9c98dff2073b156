use dispatch_client::validation::{email, required, EMAIL_MESSAGE, REQUIRED_MESSAGE};

#[test]
fn required_accepts_present_values() {
    assert_eq!(required("x"), Ok(()));
    assert_eq!(required(&vec![1]), Ok(()));
    assert_eq!(required(&[1, 2]), Ok(()));
    assert_eq!(required(&0), Ok(()));
    assert_eq!(required(&false), Ok(()));
    assert_eq!(required(&Some("value")), Ok(()));
}

#[test]
fn required_rejects_blank_values() {
    assert_eq!(required(""), Err(REQUIRED_MESSAGE));
    assert_eq!(required("  "), Err(REQUIRED_MESSAGE));
    assert_eq!(required(&Vec::<i32>::new()), Err(REQUIRED_MESSAGE));
    assert_eq!(required(&None::<i32>), Err(REQUIRED_MESSAGE));
    assert_eq!(REQUIRED_MESSAGE, "This field is required");
}

#[test]
fn email_shapes() {
    assert_eq!(email("a@b.com"), Ok(()));
    assert_eq!(email("first.last@sub.example.co"), Ok(()));
    assert_eq!(email("not-an-email"), Err(EMAIL_MESSAGE));
    assert_eq!(email("two@@example.com"), Err(EMAIL_MESSAGE));
    assert_eq!(email("space in@example.com"), Err(EMAIL_MESSAGE));
    assert_eq!(EMAIL_MESSAGE, "Must be a valid email");
}
