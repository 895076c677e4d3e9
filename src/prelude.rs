#[doc(no_inline)]
pub use crate::codec::{SeqRead as _, SeqWrite as _};
#[doc(no_inline)]
pub use crate::record::{Sequence as _, SequenceMut as _};
