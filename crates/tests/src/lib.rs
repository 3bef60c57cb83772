#[cfg(test)]
mod common;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod registration_tests;

#[cfg(test)]
mod session_routing_tests;

#[cfg(test)]
mod render_tests;
