/// Builds a [`BencodeValue::Dictionary`](crate::bencode::enums::bencode_value::BencodeValue)
/// from `key => value` pairs.
///
/// ```
/// use warp_tracker::{bencode_bytes, bencode_int, bencode_map};
///
/// let response = bencode_map! {
///     "failure reason" => bencode_bytes!("Torrent not registered"),
///     "failure code" => bencode_int!(200)
/// };
/// assert_eq!(response.encode(), b"d12:failure codei200e14:failure reason22:Torrent not registerede".to_vec());
/// ```
#[macro_export]
macro_rules! bencode_map {
    () => {
        $crate::bencode::enums::bencode_value::BencodeValue::Dictionary(
            $crate::bencode::structs::bencode_dictionary::BencodeDictionary::new()
        )
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut dictionary = $crate::bencode::structs::bencode_dictionary::BencodeDictionary::new();
        $(dictionary.insert($key, $value);)+
        $crate::bencode::enums::bencode_value::BencodeValue::Dictionary(dictionary)
    }};
}

/// Builds a byte string value from anything convertible to one.
#[macro_export]
macro_rules! bencode_bytes {
    ($value:expr) => {
        $crate::bencode::enums::bencode_value::BencodeValue::from($value)
    };
}

#[macro_export]
macro_rules! bencode_int {
    ($value:expr) => {
        $crate::bencode::enums::bencode_value::BencodeValue::Integer(
            $crate::bencode::structs::bencode_integer::BencodeInteger::from($value as i64)
        )
    };
}

#[macro_export]
macro_rules! bencode_list {
    () => {
        $crate::bencode::enums::bencode_value::BencodeValue::List(Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::bencode::enums::bencode_value::BencodeValue::List(vec![$($value),+])
    };
}
