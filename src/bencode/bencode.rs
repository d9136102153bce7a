use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::bencode_dictionary::BencodeDictionary;
use crate::bencode::structs::bencode_integer::BencodeInteger;

/// A container still being filled while decoding.
enum DecodeFrame {
    List(Vec<BencodeValue>),
    /// Dictionary under construction and the key waiting for its value.
    Dictionary(BencodeDictionary, Option<Vec<u8>>),
}

/// A pending write while encoding.
enum EncodeStep<'a> {
    Value(&'a BencodeValue),
    Key(&'a [u8]),
    End,
}

/// Decodes exactly one value spanning the whole input.
///
/// Fails with [`BencodeError::TrailingData`] when bytes remain after the
/// first complete value.
pub fn decode(data: &[u8]) -> Result<BencodeValue, BencodeError>
{
    let (value, next) = decode_at(data, 0)?;
    if next != data.len() {
        return Err(BencodeError::TrailingData(next));
    }
    Ok(value)
}

/// Decodes one value starting at `start`.
///
/// Returns the value together with the offset right after it, which lets a
/// caller walk a buffer holding several concatenated values.
pub fn decode_at(data: &[u8], start: usize) -> Result<(BencodeValue, usize), BencodeError>
{
    let mut stack: Vec<DecodeFrame> = Vec::new();
    let mut pos = start;

    loop {
        let token = match data.get(pos) {
            Some(token) => *token,
            None if stack.is_empty() => return Err(BencodeError::UnexpectedToken(pos)),
            None => return Err(BencodeError::TruncatedInput(pos)),
        };

        let expects_key = matches!(stack.last(), Some(DecodeFrame::Dictionary(_, None)));
        if expects_key && matches!(token, b'i' | b'l' | b'd') {
            return Err(BencodeError::InvalidKeyType(pos));
        }

        let closes_container = token == b'e' && (expects_key || matches!(stack.last(), Some(DecodeFrame::List(_))));

        let completed = if closes_container {
            pos += 1;
            match stack.pop() {
                Some(DecodeFrame::List(items)) => BencodeValue::List(items),
                Some(DecodeFrame::Dictionary(dictionary, _)) => BencodeValue::Dictionary(dictionary),
                None => return Err(BencodeError::UnexpectedToken(pos - 1)),
            }
        } else {
            match token {
                b'0'..=b'9' => {
                    let (bytes, next) = decode_byte_string(data, pos)?;
                    pos = next;
                    BencodeValue::ByteString(bytes)
                }
                b'i' => {
                    let (number, next) = decode_integer(data, pos)?;
                    pos = next;
                    BencodeValue::Integer(number)
                }
                b'l' => {
                    stack.push(DecodeFrame::List(Vec::new()));
                    pos += 1;
                    continue;
                }
                b'd' => {
                    stack.push(DecodeFrame::Dictionary(BencodeDictionary::new(), None));
                    pos += 1;
                    continue;
                }
                _ => return Err(BencodeError::UnexpectedToken(pos)),
            }
        };

        match stack.last_mut() {
            None => return Ok((completed, pos)),
            Some(DecodeFrame::List(items)) => items.push(completed),
            Some(DecodeFrame::Dictionary(dictionary, pending_key)) => match pending_key.take() {
                Some(key) => {
                    // Duplicate keys: the last occurrence wins.
                    dictionary.insert(key, completed);
                }
                None => {
                    let mut completed = completed;
                    match &mut completed {
                        BencodeValue::ByteString(key) => *pending_key = Some(std::mem::take(key)),
                        _ => return Err(BencodeError::InvalidKeyType(pos)),
                    }
                }
            },
        }
    }
}

fn decode_byte_string(data: &[u8], start: usize) -> Result<(Vec<u8>, usize), BencodeError>
{
    let mut pos = start;
    let mut length: usize = 0;
    loop {
        match data.get(pos) {
            Some(b':') => break,
            Some(digit @ b'0'..=b'9') => {
                length = length.checked_mul(10)
                    .and_then(|length| length.checked_add((digit - b'0') as usize))
                    .ok_or(BencodeError::MalformedLength(start))?;
                pos += 1;
            }
            _ => return Err(BencodeError::MalformedLength(start)),
        }
    }

    let content_start = pos + 1;
    let content_end = content_start.checked_add(length)
        .filter(|end| *end <= data.len())
        .ok_or(BencodeError::TruncatedInput(content_start))?;

    Ok((data[content_start..content_end].to_vec(), content_end))
}

fn decode_integer(data: &[u8], start: usize) -> Result<(BencodeInteger, usize), BencodeError>
{
    let digits_start = start + 1;
    let terminator = data[digits_start.min(data.len())..]
        .iter()
        .position(|byte| *byte == b'e')
        .map(|offset| digits_start + offset)
        .ok_or(BencodeError::MalformedInteger(start))?;

    let number = BencodeInteger::parse(&data[digits_start..terminator])
        .ok_or(BencodeError::MalformedInteger(start))?;
    Ok((number, terminator + 1))
}

/// Encodes `value` into canonical bencode.
///
/// Dictionary keys are written in ascending byte order whatever order they
/// were inserted in.
pub fn encode(value: &BencodeValue) -> Vec<u8>
{
    let mut output: Vec<u8> = Vec::new();
    let mut steps: Vec<EncodeStep> = vec![EncodeStep::Value(value)];

    while let Some(step) = steps.pop() {
        match step {
            EncodeStep::End => output.push(b'e'),
            EncodeStep::Key(key) => write_byte_string(&mut output, key),
            EncodeStep::Value(BencodeValue::ByteString(bytes)) => write_byte_string(&mut output, bytes),
            EncodeStep::Value(BencodeValue::Integer(number)) => {
                output.push(b'i');
                output.extend_from_slice(number.as_str().as_bytes());
                output.push(b'e');
            }
            EncodeStep::Value(BencodeValue::List(items)) => {
                output.push(b'l');
                steps.push(EncodeStep::End);
                steps.extend(items.iter().rev().map(EncodeStep::Value));
            }
            EncodeStep::Value(BencodeValue::Dictionary(dictionary)) => {
                output.push(b'd');
                steps.push(EncodeStep::End);
                for (key, item) in dictionary.sorted_entries().into_iter().rev() {
                    steps.push(EncodeStep::Value(item));
                    steps.push(EncodeStep::Key(key));
                }
            }
        }
    }

    output
}

fn write_byte_string(output: &mut Vec<u8>, bytes: &[u8])
{
    output.extend_from_slice(bytes.len().to_string().as_bytes());
    output.push(b':');
    output.extend_from_slice(bytes);
}
