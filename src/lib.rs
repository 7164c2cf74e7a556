pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod lybs {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod rules;
            pub mod state;
        }
        pub mod use_cases {
            pub mod execute;
            pub mod post_lyb {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_lyb {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_lyb {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_lybs {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
            pub mod get_lyb {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod errors;
                pub mod serializer;
            }
            pub mod outbound {
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod shell;
