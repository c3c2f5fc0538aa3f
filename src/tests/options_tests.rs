use crate::{
    FormatError, FormatMode, PhoneClass, PhoneFieldError, PhoneOptions, Rejection, PHONE_VALIDATOR,
};

#[test]
fn defaults_target_indian_mobiles() {
    let options = PhoneOptions::default();
    assert_eq!(options.country, "IN");
    assert_eq!(options.class, PhoneClass::Mobile);
    assert!(options.required);
    assert_eq!(options.mode, FormatMode::Auto);
    assert!(options.custom_format.is_none());
}

#[test]
fn checked_rejects_custom_mode_without_formatter() {
    let options = PhoneOptions {
        mode: FormatMode::Custom,
        ..PhoneOptions::default()
    };
    assert_eq!(
        options.checked().err(),
        Some(FormatError::MissingCustomFormatter)
    );

    let formatter = |number: &str, _: &str| number.to_owned();
    let options = PhoneOptions {
        mode: FormatMode::Custom,
        custom_format: Some(&formatter),
        ..PhoneOptions::default()
    };
    assert!(options.checked().is_ok());
}

#[test]
fn process_honours_required() {
    let optional = PhoneOptions {
        required: false,
        ..PhoneOptions::default()
    };
    assert_eq!(PHONE_VALIDATOR.process(None, &optional), Ok(None));
    assert_eq!(PHONE_VALIDATOR.process(Some(""), &optional), Ok(None));

    let required = PhoneOptions::default();
    assert_eq!(
        PHONE_VALIDATOR.process(None, &required),
        Err(PhoneFieldError::Rejected(Rejection::Required))
    );
}

#[test]
fn process_validates_and_renders() {
    let options = PhoneOptions {
        country: "US",
        mode: FormatMode::National,
        ..PhoneOptions::default()
    };
    assert_eq!(
        PHONE_VALIDATOR.process(Some("(555) 234-5678"), &options),
        Ok(Some("5552345678".to_owned()))
    );

    let rejected = PHONE_VALIDATOR.process(Some("0000"), &options).unwrap_err();
    assert!(matches!(rejected, PhoneFieldError::Rejected(_)));
}

#[test]
fn process_with_custom_formatter() {
    let formatter = |number: &str, country: &str| format!("{country}/{number}");
    let options = PhoneOptions {
        mode: FormatMode::Custom,
        custom_format: Some(&formatter),
        ..PhoneOptions::default()
    }
    .checked()
    .unwrap();
    assert_eq!(
        PHONE_VALIDATOR.process(Some("9876543210"), &options),
        Ok(Some("IN/+919876543210".to_owned()))
    );
}
