pub mod hour_confirm;
