pub mod configuration;

pub mod approximation {
    pub mod approximationerror;
    pub mod approximator;
    pub mod percenterror;
    pub mod secantline;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod quadratic;
    }
    pub mod round;
    pub mod sampling;
}

pub mod plotting {
    pub mod chartdata;
}
