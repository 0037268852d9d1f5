pub mod matcher;
pub mod process;
pub mod script;
pub mod stage;
pub mod table;
pub mod translator;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing {
    pub mod stage_contract;
}

pub use script::{Script, detect_script, is_valid_aksara_jawa};
pub use stage::{LowerCase, ReplaceDigraphs, Trim};
pub use table::{TABLES, Tables};
pub use translator::{TranslateError, Translator, TranslatorBuilder};
