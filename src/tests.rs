use crate::mock::{self, Event};
use crate::{
    connection, context, facilities, levels, options, Build, Config, Context, Facility, Level,
    Options, Priority, Syslog, SyslogBuilder, SyslogConfig, SyslogDrain,
};
use serde::Serialize;
use slog::{info, o, Drain, Logger};

fn local0_logger(ident: &str) -> Syslog {
    SyslogBuilder::new()
        .ident(ident)
        .facility(Facility::Local0)
        .build()
        .unwrap()
}

#[test]
fn building_opens_the_connection() {
    let (logger, events) = mock::testing(|| {
        let mut builder = SyslogBuilder::new();
        builder
            .ident("test-app")
            .facility(Facility::Local0)
            .log_cons();
        let logger = builder.build().unwrap();
        assert!(connection::is_open());
        logger
    });

    assert!(logger.is_open());
    assert_eq!(logger.ident(), "test-app");
    assert_eq!(logger.facility(), Facility::Local0);
    assert_eq!(logger.options(), Options::PID | Options::CONS);
    assert_eq!(
        events,
        vec![Event::OpenLog {
            ident: "test-app".to_string(),
            options: (Options::PID | Options::CONS).bits(),
            facility: Facility::Local0.to_native(),
        }]
    );
}

#[test]
fn every_level_method_writes_its_code() {
    let ((), events) = mock::testing(|| {
        let logger = local0_logger("levels");
        logger
            .emergency("emergency message", None)
            .alert("alert message", None)
            .critical("critical message", None)
            .error("error message", None)
            .warning("warning message", None)
            .notice("notice message", None)
            .info("info message", None)
            .debug("debug message", None);
    });

    let written: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            Event::SysLog { priority, message } => Some((*priority, message.as_str())),
            _ => None,
        })
        .collect();

    assert_eq!(
        written,
        vec![
            (0, "emergency message"),
            (1, "alert message"),
            (2, "critical message"),
            (3, "error message"),
            (4, "warning message"),
            (5, "notice message"),
            (6, "info message"),
            (7, "debug message"),
        ]
    );
}

#[test]
fn context_tokens_are_appended() {
    let ((), events) = mock::testing(|| {
        let logger = local0_logger("ctx");
        logger.error(
            "User action failed",
            &context! { "userId" => 123, "action" => "login" },
        );
    });

    assert_eq!(
        events.last(),
        Some(&Event::SysLog {
            priority: Level::Err.code(),
            message: r#"User action failed userId=123 action="login""#.to_string(),
        })
    );
}

#[test]
fn unserializable_context_still_logs() {
    #[derive(Debug)]
    struct Cyclic;

    impl Serialize for Cyclic {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cycle detected"))
        }
    }

    let ((), events) = mock::testing(|| {
        let mut ctx = Context::new();
        ctx.insert("self", Cyclic);
        local0_logger("cyclic").info("Circular context", &ctx);
    });

    match events.last() {
        Some(Event::SysLog { message, .. }) => {
            assert!(message.starts_with("Circular context"), "got {:?}", message);
        }
        other => panic!("expected a SysLog event, got {:?}", other),
    }
}

#[test]
fn chained_calls_write_in_order() {
    let (logger, events) = mock::testing(|| {
        let mut builder = SyslogBuilder::new();
        builder
            .ident("svc")
            .facility(Facility::Local0)
            .options(Options::PID);
        let logger = builder.build().unwrap();
        logger
            .error("disk full", &context! { "code" => 500 })
            .info("recovered", None);
        logger
    });

    assert_eq!(logger.facility(), Facility::Local0);
    assert_eq!(
        events,
        vec![
            Event::OpenLog {
                ident: "svc".to_string(),
                options: Options::PID.bits(),
                facility: Facility::Local0.to_native(),
            },
            Event::SysLog {
                priority: Level::Err.code(),
                message: "disk full code=500".to_string(),
            },
            Event::SysLog {
                priority: Level::Info.code(),
                message: "recovered".to_string(),
            },
        ]
    );
}

#[test]
fn logging_after_close_reopens() {
    let (logger, events) = mock::testing(|| {
        let logger = local0_logger("reopen");
        logger.close();
        assert!(!logger.is_open());
        logger.info("Message after reinit", None);
        logger
    });

    assert!(logger.is_open());
    assert_eq!(
        events,
        vec![
            Event::OpenLog {
                ident: "reopen".to_string(),
                options: Options::PID.bits(),
                facility: Facility::Local0.to_native(),
            },
            Event::CloseLog,
            Event::OpenLog {
                ident: "reopen".to_string(),
                options: Options::PID.bits(),
                facility: Facility::Local0.to_native(),
            },
            Event::SysLog {
                priority: Level::Info.code(),
                message: "Message after reinit".to_string(),
            },
        ]
    );
}

#[test]
fn close_is_idempotent() {
    let (logger, events) = mock::testing(|| {
        let logger = local0_logger("closer");
        logger.close();
        logger.close();
        logger
    });

    assert!(!logger.is_open());
    let closes = events.iter().filter(|e| **e == Event::CloseLog).count();
    assert_eq!(closes, 1);
}

#[test]
fn nul_bytes_in_messages_are_stripped() {
    let ((), events) = mock::testing(|| {
        local0_logger("nul").info("bad\0message", None);
    });

    assert_eq!(
        events.last(),
        Some(&Event::SysLog {
            priority: Level::Info.code(),
            message: "badmessage".to_string(),
        })
    );
}

#[test]
fn binding_rejects_invalid_arguments_before_any_native_call() {
    let ((), events) = mock::testing(|| {
        assert!(connection::open("", Options::empty(), Facility::User).is_err());
        assert!(connection::open("a\0b", Options::empty(), Facility::User).is_err());
        assert!(connection::write(Level::Info.code(), "trun\0cated").is_err());
        assert!(!connection::is_open());
    });

    assert_eq!(events, vec![]);
}

#[test]
fn binding_passes_raw_priorities_through() {
    let ((), events) = mock::testing(|| {
        connection::open("raw", Options::empty(), Facility::Daemon).unwrap();
        let priority = Priority::from((Level::Notice, Facility::Daemon));
        connection::write(priority.into_raw(), "hello").unwrap();
        connection::close();
    });

    assert_eq!(
        events,
        vec![
            Event::OpenLog {
                ident: "raw".to_string(),
                options: 0,
                facility: Facility::Daemon.to_native(),
            },
            Event::SysLog {
                priority: Level::Notice.code() | Facility::Daemon.to_native(),
                message: "hello".to_string(),
            },
            Event::CloseLog,
        ]
    );
}

#[test]
fn reopening_overwrites_the_previous_settings() {
    let ((), events) = mock::testing(|| {
        connection::open("first", Options::empty(), Facility::User).unwrap();
        connection::open("second", Options::PID, Facility::Daemon).unwrap();
        assert!(connection::is_open());
        connection::close();
        connection::close();
    });

    assert_eq!(
        events,
        vec![
            Event::OpenLog {
                ident: "first".to_string(),
                options: 0,
                facility: Facility::User.to_native(),
            },
            Event::OpenLog {
                ident: "second".to_string(),
                options: Options::PID.bits(),
                facility: Facility::Daemon.to_native(),
            },
            Event::CloseLog,
        ]
    );
}

#[test]
fn listings_match_the_posix_tables() {
    let facilities = facilities();
    assert_eq!(facilities.len(), 20);
    assert_eq!(facilities["kern"], 0);
    assert_eq!(facilities["user"], 1);
    assert_eq!(facilities["mail"], 2);
    assert_eq!(facilities["daemon"], 3);
    assert_eq!(facilities["auth"], 4);
    assert_eq!(facilities["syslog"], 5);
    assert_eq!(facilities["lpr"], 6);
    assert_eq!(facilities["news"], 7);
    assert_eq!(facilities["uucp"], 8);
    assert_eq!(facilities["cron"], 9);
    assert_eq!(facilities["authpriv"], 10);
    assert_eq!(facilities["ftp"], 11);
    for n in 0..8 {
        let name = format!("local{}", n);
        assert_eq!(facilities[name.as_str()], 16 + n);
    }

    let levels = levels();
    assert_eq!(levels.len(), 8);
    assert_eq!(levels["emerg"], 0);
    assert_eq!(levels["alert"], 1);
    assert_eq!(levels["crit"], 2);
    assert_eq!(levels["err"], 3);
    assert_eq!(levels["warning"], 4);
    assert_eq!(levels["notice"], 5);
    assert_eq!(levels["info"], 6);
    assert_eq!(levels["debug"], 7);

    let options = options();
    assert_eq!(options.len(), 6);
    assert_eq!(options["pid"], 0x01);
    assert_eq!(options["cons"], 0x02);
    assert_eq!(options["odelay"], 0x04);
    assert_eq!(options["ndelay"], 0x08);
    assert_eq!(options["nowait"], 0x10);
    assert_eq!(options["perror"], 0x20);
}

#[test]
fn config_maps_onto_the_builder() {
    const TOML_CONFIG: &str = r#"
ident = "foo"
facility = "daemon"
log_pid = true
log_delay = false
log_perror = true
"#;

    let config: SyslogConfig = toml::from_str(TOML_CONFIG).unwrap();
    let builder = config.try_to_builder().unwrap();

    let mut expected = SyslogBuilder::new();
    expected
        .ident("foo")
        .facility(Facility::Daemon)
        .log_ndelay()
        .log_perror();
    assert_eq!(builder, expected);
}

#[test]
fn config_without_pid_clears_the_default_flag() {
    let config: SyslogConfig = toml::from_str("log_pid = false\n").unwrap();
    let builder = config.try_to_builder().unwrap();

    let mut expected = SyslogBuilder::new();
    expected.options(Options::empty());
    assert_eq!(builder, expected);
}

#[test]
fn drain_formats_kv_pairs_and_maps_levels() {
    let ((), events) = mock::testing(|| {
        let syslog = SyslogBuilder::new()
            .ident("drain-app")
            .facility(Facility::Daemon)
            .build()
            .unwrap();

        let logger = Logger::root(SyslogDrain::new(syslog).fuse(), o!());
        info!(logger, "listening"; "port" => 8080u64);
    });

    assert_eq!(
        events.last(),
        Some(&Event::SysLog {
            priority: Level::Info.code() | Facility::Daemon.to_native(),
            message: "listening port=8080".to_string(),
        })
    );
}

#[test]
fn free_functions_use_the_default_logger() {
    let ((), events) = mock::testing(|| {
        crate::info("service started", None).debug("details", None);
    });

    assert!(crate::default_logger().is_open());
    assert_eq!(crate::default_logger().facility(), Facility::User);
    assert!(crate::default_logger().options().contains(Options::PID));

    let written: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            Event::SysLog { priority, message } => Some((*priority, message.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(
        written,
        vec![(6, "service started"), (7, "details")]
    );
}
