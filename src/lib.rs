pub mod configuration;

pub mod curvefiterror;

pub mod data {
    pub mod sampleset;
    pub mod demographictable;
    pub mod csvreader;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod lagrangepolynomial;
    }

    pub mod linearsystem {
        pub mod gaussianelimination;
    }

    pub mod polynomial {
        pub mod polynomial;
    }

    pub mod regression {
        pub mod polynomialregression;
        pub mod linearregression;
        pub mod logisticregression;
    }
}

pub mod report {
    pub mod precision;
    pub mod report;
}
