//! Sort orders and year filters for a channel's video list

/// 频道视频排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelVideosOrder {
    /// 最新
    New,
    /// 最火
    Hot,
    /// 播放量最高
    View,
}

impl ChannelVideosOrder {
    pub fn query_fragment(self) -> &'static str {
        match self {
            ChannelVideosOrder::New => "?sort_type=new",
            ChannelVideosOrder::Hot => "?sort_type=hot",
            ChannelVideosOrder::View => "?sort_type=view",
        }
    }
}

/// 频道视频筛选条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelVideosFilter {
    All,
    Year2011,
    Year2012,
    Year2013,
    Year2014,
    Year2015,
    Year2016,
    Year2017,
    Year2018,
    Year2019,
    Year2020,
    Year2021,
    Year2022,
    Year2023,
}

impl ChannelVideosFilter {
    pub fn query_fragment(self) -> &'static str {
        match self {
            ChannelVideosFilter::All => "?filter_type=",
            ChannelVideosFilter::Year2011 => "?filter_type=2011",
            ChannelVideosFilter::Year2012 => "?filter_type=2012",
            ChannelVideosFilter::Year2013 => "?filter_type=2013",
            ChannelVideosFilter::Year2014 => "?filter_type=2014",
            ChannelVideosFilter::Year2015 => "?filter_type=2015",
            ChannelVideosFilter::Year2016 => "?filter_type=2016",
            ChannelVideosFilter::Year2017 => "?filter_type=2017",
            ChannelVideosFilter::Year2018 => "?filter_type=2018",
            ChannelVideosFilter::Year2019 => "?filter_type=2019",
            ChannelVideosFilter::Year2020 => "?filter_type=2020",
            ChannelVideosFilter::Year2021 => "?filter_type=2021",
            ChannelVideosFilter::Year2022 => "?filter_type=2022",
            ChannelVideosFilter::Year2023 => "?filter_type=2023",
        }
    }

    /// The filter for a single year, if bilibili offers one.
    pub fn for_year(year: u16) -> Option<Self> {
        Some(match year {
            2011 => ChannelVideosFilter::Year2011,
            2012 => ChannelVideosFilter::Year2012,
            2013 => ChannelVideosFilter::Year2013,
            2014 => ChannelVideosFilter::Year2014,
            2015 => ChannelVideosFilter::Year2015,
            2016 => ChannelVideosFilter::Year2016,
            2017 => ChannelVideosFilter::Year2017,
            2018 => ChannelVideosFilter::Year2018,
            2019 => ChannelVideosFilter::Year2019,
            2020 => ChannelVideosFilter::Year2020,
            2021 => ChannelVideosFilter::Year2021,
            2022 => ChannelVideosFilter::Year2022,
            2023 => ChannelVideosFilter::Year2023,
            _ => return None,
        })
    }
}

/// Either a sort order (multi-order endpoint) or a filter (featured endpoint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoListOption {
    Order(ChannelVideosOrder),
    Filter(ChannelVideosFilter),
}

impl VideoListOption {
    pub fn query_fragment(self) -> &'static str {
        match self {
            VideoListOption::Order(order) => order.query_fragment(),
            VideoListOption::Filter(filter) => filter.query_fragment(),
        }
    }
}

impl From<ChannelVideosOrder> for VideoListOption {
    fn from(order: ChannelVideosOrder) -> Self {
        VideoListOption::Order(order)
    }
}

impl From<ChannelVideosFilter> for VideoListOption {
    fn from(filter: ChannelVideosFilter) -> Self {
        VideoListOption::Filter(filter)
    }
}
