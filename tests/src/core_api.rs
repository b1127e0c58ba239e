mod calculator;
mod greeter;
