// Rendering: font discovery/loading, the cursor-threaded page surface, and
// the certificate composition itself.

pub mod certificate;
pub mod fonts;
pub mod page;
