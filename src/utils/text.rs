//! Normalización de texto para búsquedas
//!
//! El cliente compara origen/destino ignorando mayúsculas y tildes
//! ("México" debe matchear "mexico"). Acá replicamos esa normalización
//! para todo el texto libre que entra al filtro de viajes.

/// Normalizar un string: minúsculas + tildes/diacríticos latinos plegados
pub fn normalize(input: &str) -> String {
    input.to_lowercase().chars().map(fold_diacritic).collect()
}

/// Verificar contención de substring con normalización en ambos lados
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}

// Cubre el alfabeto latino que aparece en nombres de lugares del Río de la
// Plata; cualquier otro carácter pasa sin cambios.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        _ => c,
    }
}
