/*!
 * Template variables in subtitle text.
 *
 * - `scanner`: lazy scan of `{{name}}` spans
 * - `table`: insertion-ordered name/value table with auto-registration
 * - `substitution`: rewrites segment content and counts what happened
 */

pub mod scanner;
pub mod substitution;
pub mod table;

pub use scanner::{Placeholder, PlaceholderScanner};
pub use substitution::{substitute, substitute_text, SubstitutionStats};
pub use table::{Resolution, VariableTable};
