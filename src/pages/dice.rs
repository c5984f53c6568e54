//! # Página de Dados
//! src/pages/dice.rs
//!
//! `GET /?rolls=3&sides=6` lanza 3 dados de 6 caras, un `<p>N</p>` por dado.
//! La sección de dados solo aparece si `rolls` y `sides` están presentes y
//! no vacíos.

use super::write_diagnostics;
use crate::http::{leading_int, RequestLine};
use rand::Rng;
use std::fmt::Write;

/// Genera el documento HTML del lanzador de dados
pub fn render<R: Rng>(request: &RequestLine, rng: &mut R, max_rolls: u64) -> String {
    let mut out = String::from("<html>\n<body>\n");
    write_diagnostics(&mut out, request);

    if let (Some(rolls), Some(sides)) = (
        request.non_empty_param("rolls"),
        request.non_empty_param("sides"),
    ) {
        out.push_str("<h1>Rolls!</h1>\n");
        for roll in roll_dice(rng, leading_int(rolls), leading_int(sides), max_rolls) {
            let _ = writeln!(out, "<p>{}</p>", roll);
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// Lanza `rolls` dados uniformes en `[1, sides]`
///
/// Con `rolls <= 0` o `sides <= 0` no hay dados. La cantidad se acota a
/// `max_rolls`.
pub fn roll_dice<R: Rng>(rng: &mut R, rolls: i64, sides: i64, max_rolls: u64) -> Vec<i64> {
    if rolls <= 0 || sides <= 0 {
        return Vec::new();
    }

    let count = u64::try_from(rolls).unwrap_or(0).min(max_rolls);
    (0..count).map(|_| rng.gen_range(1..=sides)).collect()
}
