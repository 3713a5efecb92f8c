#[cfg(test)]
mod common;

#[cfg(test)]
mod stats_tests;

#[cfg(test)]
mod recent_motions_tests;

#[cfg(test)]
mod motion_filter_tests;

#[cfg(test)]
mod motion_detail_tests;

#[cfg(test)]
mod law_firm_tests;

#[cfg(test)]
mod refresh_tests;

#[cfg(test)]
mod settings_tests;

#[cfg(test)]
mod transport_error_tests;
