pub mod stanza;
