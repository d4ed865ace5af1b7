
#[cfg(test)]
mod dropdown_keyboard_tests;

#[cfg(test)]
mod dropdown_pointer_tests;


#[cfg(test)]
mod calendar_navigation_tests;

#[cfg(test)]
mod rating_tests;


#[cfg(test)]
mod config_tests;
