pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
    }
    pub mod polynomial {
        pub mod polynomialerror;
        pub mod polynomialxd;
    }
    pub mod smoothingspline {
        pub mod derivativeorder;
        pub mod spline1dseg;
        pub mod spline1dsegmanager;
    }
}
