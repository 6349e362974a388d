pub mod file;
pub mod nlsplice;
pub mod rline;

// 1. Physical source file multibyte characters are mapped, in an implementation
// defined manner, to the source character set (introducing new-line characters for
// end-of-line indicators) if necessary.

// 2. Each instance of a backslash character (\) immediately followed by a new-line
// character is deleted, splicing physical source lines to form logical source lines.
// Only the last backslash on any physical source line shall be eligible for being part
// of such a splice. A source file that is not empty shall end in a new-line character,
// which shall not be immediately preceded by a backslash character before any such
// splicing takes place
