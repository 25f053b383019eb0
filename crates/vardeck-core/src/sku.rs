//! SKU preview generation for the product-creation screen.
//!
//! The generator is pure and total: any combination of name, color, and size
//! yields a deterministic string without I/O. Previews are recomputed on every
//! input change and never persisted; the backend assigns the authoritative SKU
//! at save time and is free to disagree with the preview.

/// Maximum length of the base segment in characters.
const MAX_BASE_CHARS: usize = 10;

/// Base codes shorter than two characters are right-padded with `'P'` to this
/// length (covers empty and all-punctuation product names).
const PADDED_BASE_CHARS: usize = 4;

/// Color segments and non-canonical size fallbacks abbreviate to this many
/// characters.
const ABBREV_CHARS: usize = 3;

/// Canonical size names and their SKU codes. Lookup is case-insensitive on
/// the trimmed size string; anything not in this table falls back to digit
/// extraction and then to a plain abbreviation.
const SIZE_CODES: &[(&str, &str)] = &[
    ("extra small", "XS"),
    ("small", "S"),
    ("medium", "M"),
    ("large", "L"),
    ("extra large", "XL"),
    ("xxl", "XXL"),
];

/// Generates a SKU preview from a product name and optional color and size.
///
/// Segments are joined with `-`:
/// 1. **Base** — word initials plus digit runs from `product_name`, uppercased
///    and capped at [`MAX_BASE_CHARS`] characters. `"Classic Cotton T-Shirt 2"`
///    → `"CCTS2"`. Codes shorter than two characters are padded with `'P'` to
///    [`PADDED_BASE_CHARS`], so an empty name still yields `"PPPP"`.
/// 2. **Color** — first [`ABBREV_CHARS`] characters of `color`, uppercased.
///    `"Red"` → `"RED"`.
/// 3. **Size** — canonical code from [`SIZE_CODES`] when the trimmed,
///    lowercased size matches (`"Large"` → `"L"`); otherwise the first digit
///    run (`"128GB"` → `"128"`); otherwise the first [`ABBREV_CHARS`]
///    characters uppercased (`"Tall"` → `"TAL"`).
///
/// Empty and whitespace-only `color`/`size` values are treated as absent, the
/// same normalization the variant form applies before constructing a
/// [`crate::ProductVariant`].
#[must_use]
pub fn generate_sku(product_name: &str, color: Option<&str>, size: Option<&str>) -> String {
    let mut segments = vec![base_segment(product_name)];

    if let Some(color) = present(color) {
        segments.push(color_segment(color));
    }
    if let Some(size) = present(size) {
        segments.push(size_segment(size));
    }

    segments.join("-")
}

/// Trims an optional input and treats the empty result as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Builds the base segment from the product name.
///
/// Characters that are neither alphanumeric nor whitespace act as word
/// separators, so `"T-Shirt"` contributes the initials `T` and `S` rather
/// than collapsing into one word. Each word contributes its first character
/// (uppercased, when alphabetic) to an initials accumulator and its first
/// ASCII digit run to a numbers accumulator; the base is initials followed by
/// numbers.
fn base_segment(product_name: &str) -> String {
    let cleaned: String = product_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut initials = String::new();
    let mut numbers = String::new();

    for word in cleaned.split_whitespace() {
        if let Some(first) = word.chars().next() {
            if first.is_alphabetic() {
                initials.extend(first.to_uppercase());
            }
        }
        if let Some(run) = first_digit_run(word) {
            numbers.push_str(run);
        }
    }

    let mut code: String = initials
        .chars()
        .chain(numbers.chars())
        .take(MAX_BASE_CHARS)
        .collect();

    let len = code.chars().count();
    if len < 2 {
        code.extend(std::iter::repeat_n('P', PADDED_BASE_CHARS - len));
    }

    code
}

/// Builds the color segment: first [`ABBREV_CHARS`] characters, uppercased.
fn color_segment(color: &str) -> String {
    color
        .chars()
        .take(ABBREV_CHARS)
        .collect::<String>()
        .to_uppercase()
}

/// Builds the size segment: canonical table lookup, then first digit run,
/// then uppercased abbreviation. Input must already be trimmed.
fn size_segment(size: &str) -> String {
    let lower = size.to_lowercase();
    for (name, code) in SIZE_CODES {
        if lower == *name {
            return (*code).to_owned();
        }
    }

    if let Some(run) = first_digit_run(size) {
        return run.to_owned();
    }

    size.chars()
        .take(ABBREV_CHARS)
        .collect::<String>()
        .to_uppercase()
}

/// Returns the first maximal run of ASCII digits in `s`, or `None` when `s`
/// contains no digit.
fn first_digit_run(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let end = bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |rel| start + rel);
    Some(&s[start..end])
}
