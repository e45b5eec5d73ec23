mod lookup_synonyms;

pub use lookup_synonyms::*;
