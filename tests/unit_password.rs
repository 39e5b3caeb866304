use postboard::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_differs_from_plaintext() {
    let hash = hash_password("supersecret").unwrap();

    assert_ne!(hash, "supersecret");
    assert!(hash.starts_with("$2"));
}

#[test]
fn test_verify_correct_password() {
    let hash = hash_password("supersecret").unwrap();

    assert!(verify_password("supersecret", &hash).unwrap());
}

#[test]
fn test_verify_incorrect_password() {
    let hash = hash_password("supersecret").unwrap();

    assert!(!verify_password("wrongpass", &hash).unwrap());
}

#[test]
fn test_verify_invalid_hash_errors() {
    assert!(verify_password("supersecret", "not-a-bcrypt-hash").is_err());
}

#[test]
fn test_salts_are_unique() {
    let first = hash_password("supersecret").unwrap();
    let second = hash_password("supersecret").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("supersecret", &first).unwrap());
    assert!(verify_password("supersecret", &second).unwrap());
}

#[test]
fn test_special_characters() {
    let password = "p@$$w0rd!#%&*()[]{}";
    let hash = hash_password(password).unwrap();

    assert!(verify_password(password, &hash).unwrap());
}

#[test]
fn test_case_sensitive() {
    let hash = hash_password("SuperSecret").unwrap();

    assert!(!verify_password("supersecret", &hash).unwrap());
}
