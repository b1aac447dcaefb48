mod dispatch;
mod freebusy;
mod helpers;
mod schedulable;
