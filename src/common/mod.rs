pub mod stringutils;
