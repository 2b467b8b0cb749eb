mod chrome_tests;
mod width_util_tests;
