pub(crate) mod atoms;
pub(crate) mod locale_menu;
pub(crate) mod navbar;
pub(crate) mod toast;
