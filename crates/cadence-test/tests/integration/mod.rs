mod oracle;
mod properties;
