pub mod bar_chart;
pub mod catalog_page;
pub mod confirm_dialog;
pub mod data_table;
pub mod dynamic_form;
pub mod entity_form_dialog;
pub mod message_banner;
pub mod stat_card;
