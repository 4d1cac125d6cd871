use growvec::{reserve, GrowVec, GrowVecError};

#[test]
fn test_insert_into_empty_vector() {
    let mut vec = GrowVec::new();

    vec.insert(0, 42).unwrap();

    assert_eq!(vec.len(), 1);
    assert_eq!(vec.capacity(), 1);
    assert_eq!(vec.as_slice(), &[42]);
}

#[test]
fn test_insert_at_front_shifts_right() {
    let mut vec = GrowVec::from_slice(&[2, 3, 4]).unwrap();

    vec.insert(0, 1).unwrap();

    assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_insert_in_middle_preserves_relative_order() {
    let mut vec = GrowVec::from_slice(&[1, 2, 4, 5]).unwrap();

    vec.insert(2, 3).unwrap();

    assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(vec[2], 3);
}

#[test]
fn test_insert_at_len_appends() {
    let mut vec = GrowVec::from_slice(&[1, 2]).unwrap();

    vec.insert(2, 3).unwrap();

    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_insert_past_len_is_rejected() {
    let mut vec = GrowVec::from_slice(&[1, 2]).unwrap();

    let result = vec.insert(3, 9);

    assert_eq!(
        result.unwrap_err(),
        GrowVecError::IndexOutOfBounds { index: 3, length: 2 }
    );
    assert_eq!(vec.as_slice(), &[1, 2]);
}

#[test]
fn test_insert_when_full_doubles_capacity() {
    let mut vec = GrowVec::from_slice(&[1, 2, 3, 4]).unwrap();
    assert_eq!(vec.capacity(), 4);

    vec.insert(1, 10).unwrap();

    assert_eq!(vec.capacity(), 8);
    assert_eq!(vec.as_slice(), &[1, 10, 2, 3, 4]);
}

#[test]
fn test_insert_with_room_does_not_reallocate() {
    let mut vec: GrowVec<i32> = GrowVec::with_reservation(reserve(8)).unwrap();
    vec.push(1).unwrap();
    vec.push(3).unwrap();

    vec.insert(1, 2).unwrap();

    assert_eq!(vec.capacity(), 8);
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_repeated_front_insert_keeps_order() {
    let mut vec = GrowVec::new();

    for i in 0..10 {
        vec.insert(0, i).unwrap();
    }

    assert_eq!(vec.as_slice(), &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_remove_middle_shifts_left() {
    let mut vec = GrowVec::from_slice(&[1, 2, 3, 4, 5]).unwrap();

    let removed = vec.remove(2);

    assert_eq!(removed, 3);
    assert_eq!(vec.as_slice(), &[1, 2, 4, 5]);
    assert_eq!(vec.len(), 4);
}

#[test]
fn test_remove_first_and_last() {
    let mut vec = GrowVec::from_slice(&[1, 2, 3]).unwrap();

    assert_eq!(vec.remove(0), 1);
    assert_eq!(vec.as_slice(), &[2, 3]);

    assert_eq!(vec.remove(1), 3);
    assert_eq!(vec.as_slice(), &[2]);
}

#[test]
fn test_remove_keeps_capacity() {
    let mut vec = GrowVec::from_slice(&[1, 2, 3, 4]).unwrap();

    vec.remove(1);
    vec.remove(1);

    assert_eq!(vec.len(), 2);
    assert_eq!(vec.capacity(), 4);
}

#[test]
#[should_panic(expected = "Index 3 out of bounds for vector of length 3")]
fn test_remove_out_of_bounds_panics() {
    let mut vec = GrowVec::from_slice(&[1, 2, 3]).unwrap();
    vec.remove(3);
}

#[test]
fn test_insert_remove_round_trip() {
    let mut vec = GrowVec::from_slice(&[1, 2, 3]).unwrap();

    vec.insert(1, 9).unwrap();
    let removed = vec.remove(1);

    assert_eq!(removed, 9);
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_insert_of_owned_values() {
    let mut vec = GrowVec::from_slice(&["b".to_string(), "c".to_string()]).unwrap();

    vec.insert(0, "a".to_string()).unwrap();

    assert_eq!(vec.as_slice(), &["a", "b", "c"]);
}
