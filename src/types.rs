// Machine word. Arithmetic routinely leaves the loaded program's digit
// range, so values are 64-bit throughout.
pub type Int = i64;
