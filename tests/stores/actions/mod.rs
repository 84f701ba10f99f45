pub mod counter_add;
pub mod counter_reset;
pub mod settings_set;
