pub mod cron_job;
