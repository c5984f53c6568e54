//! # Query Parameters
//! src/http/query.rs
//!
//! Separación de la query string en pares `key=value` y coerción de
//! valores a enteros. No se hace URL decoding: `%20` y `+` pasan tal cual.

use std::collections::HashMap;

/// Parsea una query string en un HashMap
///
/// Ejemplo: "rolls=3&sides=6&debug"
/// Retorna: {"rolls": "3", "sides": "6", "debug": ""}
///
/// - Un par sin `=` queda con valor vacío
/// - Los pares vacíos (`a=1&&b=2`) se ignoran
/// - Si una key se repite, gana la última
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }

        // Solo el primer '=' separa key de value
        match pair.split_once('=') {
            Some((key, value)) => {
                params.insert(key.to_string(), value.to_string());
            }
            None => {
                params.insert(pair.to_string(), String::new());
            }
        }
    }

    params
}

/// Convierte un texto a entero tomando solo los dígitos iniciales
///
/// Ignora espacios al inicio, acepta un signo opcional y luego lee la
/// secuencia más larga de dígitos ASCII. Si no hay dígitos retorna 0.
/// Valores fuera de rango se saturan a `i64::MIN` / `i64::MAX`.
///
/// # Ejemplo
/// ```
/// use roll_server::http::leading_int;
///
/// assert_eq!(leading_int("42"), 42);
/// assert_eq!(leading_int("12abc"), 12);
/// assert_eq!(leading_int("-3"), -3);
/// assert_eq!(leading_int("abc"), 0);
/// ```
pub fn leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    value
}
