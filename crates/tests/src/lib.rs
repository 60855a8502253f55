#[cfg(test)]
mod common;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod tutor_service_tests;

#[cfg(test)]
mod auth_client_tests;

#[cfg(test)]
mod http_surface_tests;

#[cfg(test)]
mod admin_gate_tests;
