pub mod use_digit_enforcement;
