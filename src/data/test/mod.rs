mod stat_channel;
