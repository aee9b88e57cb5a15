pub mod configuration;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod integrand;

    pub mod quadrature {
        pub mod quadratureerror;
        pub mod quadraturemethod;
        pub mod quadraturerule;
        pub mod integrationreport;
        pub mod integrationsettings;
        pub mod quadraturerulemanager;

        mod proptests;
    }
}
