pub mod check_map_opts_pars;
pub mod map_opts;
pub mod read_map_pars;
pub mod theme;
