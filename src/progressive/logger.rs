use colored::Colorize;

use crate::errors::Result;
use super::driver::ProgressiveLearner;
use super::report::IterationReport;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Iteration,Records,Accuracy,Auc,Nodes,Time\n";


impl ProgressiveLearner {
    /// Feed every slice to [`ProgressiveLearner::advance`] in order,
    /// printing the progress every `print_every` slices.
    /// Returns the report of the last slice,
    /// or `None` if `slices` is empty.
    pub fn run<I, T, R, S>(&mut self, slices: I) -> Result<Option<IterationReport>>
        where I: IntoIterator<Item = T>,
              T: AsRef<[R]>,
              R: AsRef<[S]>,
              S: AsRef<str>,
    {
        self.run_inner(slices, None)
    }


    /// Same as [`ProgressiveLearner::run`],
    /// but also writes one CSV line per slice to `filename`.
    pub fn run_with_log<I, T, R, S, P>(&mut self, slices: I, filename: P)
        -> Result<Option<IterationReport>>
        where I: IntoIterator<Item = T>,
              T: AsRef<[R]>,
              R: AsRef<[S]>,
              S: AsRef<str>,
              P: AsRef<Path>,
    {
        let mut file = File::create(filename)?;
        file.write_all(HEADER.as_bytes())?;
        self.run_inner(slices, Some(&mut file))
    }


    fn run_inner<I, T, R, S>(&mut self, slices: I, mut file: Option<&mut File>)
        -> Result<Option<IterationReport>>
        where I: IntoIterator<Item = T>,
              T: AsRef<[R]>,
              R: AsRef<[S]>,
              S: AsRef<str>,
    {
        let verbose = self.print_every != usize::MAX;
        if verbose {
            self.print_stats();
            self.print_log_header();
        }

        let mut slices = slices.into_iter().peekable();
        let mut last = None;
        while let Some(slice) = slices.next() {
            let report = self.advance(slice.as_ref())?.clone();

            if let Some(file) = file.as_mut() {
                file.write_all(report.csv_line().as_bytes())?;
            }

            let is_last = slices.peek().is_none();
            if verbose && is_last {
                print_line("[FIN]".bold().bright_green(), &report);
            } else if verbose && report.iteration % self.print_every == 0 {
                print_line("[LOG]".bold().magenta(), &report);
            }
            last = Some(report);
        }
        Ok(last)
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "".bold().blue(),
            "TEST".bold().green(),
            "TEST".bold().yellow(),
            "TRIE".bold().white(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "SLICE".bold().red(),
            "RECORDS".bold().blue(),
            "ACCURACY".bold().green(),
            "AUC".bold().yellow(),
            "NODES".bold().white(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Attributes".bold(),
            self.schema.n_attributes().to_string().bold().green(),
            "Label".bold(),
            self.schema.label().bold().green(),
            "Test records".bold(),
            self.test.len().to_string().bold().green(),
            "Default label".bold(),
            self.default_label.as_str().bold().yellow(),
            "Positive label".bold(),
            self.positive_label.as_str().bold().yellow(),
            "".bold(),
        );
    }
}


fn print_line(tag: colored::ColoredString, report: &IterationReport) {
    println!(
        "{} {}\t{}\t{}\t{}\t{}\t{}",
        tag,
        format!("{:>WIDTH$}", report.iteration).red(),
        format!("{:>WIDTH$}", report.total_records).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", report.accuracy).green(),
        format!("{:>WIDTH$.PREC_WIDTH$}", report.auc).yellow(),
        format!("{:>WIDTH$}", report.n_nodes).white(),
        time_format(report.time_millis).bold().cyan(),
    );
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m{:0>2}s", min, sec);
    }
    let hour = min / 60;
    let min = min % 60;
    format!("{:>2}h{:0>2}m", hour, min)
}
