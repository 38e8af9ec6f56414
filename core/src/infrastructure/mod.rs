pub mod auth {
    pub mod jwt_verifier;
}

pub mod catalog {
    pub mod mappers;
    pub mod repositories {
        pub mod ingredient_repository;
        pub mod symptom_repository;
    }
}

pub mod db {
    pub mod postgres;
}

pub mod food_log {
    pub mod mappers;
    pub mod repositories {
        pub mod food_log_repository;
    }
}

pub mod health {
    pub mod repositories {
        pub mod health_check_repository;
    }
}

pub mod llm {
    pub mod gemini_client;
}

pub mod trigger_analysis {
    pub mod mappers;
    pub mod repositories {
        pub mod log_snapshot_repository;
    }
}
